use glam::Vec3;

/// A named fixed camera position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Preset {
    pub name: &'static str,
    pub position: Vec3,
}

/// The five viewing angles offered as drag sources. Fixed for the session.
pub const CAMERA_PRESETS: [Preset; 5] = [
    Preset {
        name: "front",
        position: Vec3::new(0.0, 1.5, 5.0),
    },
    Preset {
        name: "back",
        position: Vec3::new(0.0, 1.5, -5.0),
    },
    Preset {
        name: "left",
        position: Vec3::new(-5.0, 1.5, 0.0),
    },
    Preset {
        name: "right",
        position: Vec3::new(5.0, 1.5, 0.0),
    },
    Preset {
        name: "top",
        position: Vec3::new(0.0, 6.0, 0.5),
    },
];

/// Resolve a dragged payload against the preset table.
pub fn preset_position(name: &str) -> Option<Vec3> {
    CAMERA_PRESETS
        .iter()
        .find(|p| p.name == name)
        .map(|p| p.position)
}
