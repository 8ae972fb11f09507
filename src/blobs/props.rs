//! Build properties grouped by partition.

use indexmap::IndexMap;

use crate::partition::Partition;

/// `key=value` properties of one partition, in build.prop order.
pub type PropMap = IndexMap<String, String>;

/// Properties of every partition, in partition discovery order.
pub type PartitionProps = IndexMap<Partition, PropMap>;
