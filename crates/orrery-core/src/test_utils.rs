//! Test utilities for Orrery

use crate::map::ParentMap;

/// The canonical worked example: checksum 42.
pub const WORKED_EXAMPLE: &str = "COM)B
B)C
C)D
D)E
E)F
B)G
G)H
D)I
E)J
J)K
K)L
";

/// The worked example with `YOU` orbiting `K` and `SAN` orbiting `I`:
/// four transfers apart.
pub const TRANSFER_EXAMPLE: &str = "COM)B
B)C
C)D
D)E
E)F
B)G
G)H
D)I
E)J
J)K
K)L
K)YOU
I)SAN
";

/// Build a map from a list of `(parent, child)` pairs, panicking on any violation.
pub fn map_from_pairs(pairs: &[(&str, &str)]) -> ParentMap {
    let mut map = ParentMap::new();
    for (parent, child) in pairs {
        map.add_orbit(parent, child).unwrap();
    }
    map
}

/// `COM)A`, `A)B`, `B)C`.
pub fn chain() -> ParentMap {
    map_from_pairs(&[("COM", "A"), ("A", "B"), ("B", "C")])
}
