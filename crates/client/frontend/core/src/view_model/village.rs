//! Village construction menu contents.
//!
//! Costs are display-only here; the build transaction and its validation
//! belong to the external program.

/// One entry of the village construction menu.
#[derive(Clone, Copy, Debug)]
pub struct ConstructionOption {
    pub title: &'static str,
    pub description: &'static str,
    pub cost: u32,
}

/// The fixed construction catalogue shown when a Village tile is clicked.
pub fn construction_options() -> [ConstructionOption; 4] {
    [
        ConstructionOption {
            title: "Barracks",
            description: "Produces warriors",
            cost: 100,
        },
        ConstructionOption {
            title: "Wall",
            description: "Enhances defense",
            cost: 75,
        },
        ConstructionOption {
            title: "Warrior",
            description: "Basic combat unit",
            cost: 25,
        },
        ConstructionOption {
            title: "Worker",
            description: "Can build and gather resources",
            cost: 10,
        },
    ]
}
