/// Identifier for a point in a [`crate::mesh::Mesh`].
///
/// This is an index into `Mesh::points`, and is only meaningful within
/// the lifetime of a given `Mesh` instance.
pub type PointId = usize;
