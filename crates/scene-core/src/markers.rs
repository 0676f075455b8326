use glam::Vec3;

/// Static description of one hidden click target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerSpec {
    pub key: &'static str,
    pub position: [f32; 3],
    /// Sphere geometry radius before scaling.
    pub radius: f32,
    /// Uniform scale applied to this marker only.
    pub scale: f32,
    pub width_segments: u32,
    pub height_segments: u32,
    pub color: [f32; 3],
    pub message: &'static str,
}

impl MarkerSpec {
    pub fn center(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    /// Radius of the rendered and pickable sphere.
    pub fn effective_radius(&self) -> f32 {
        self.radius * self.scale
    }
}

/// Reveal state attached to a marker's scene object.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkerHandler {
    pub key: &'static str,
    pub revealed: bool,
    pub message: String,
}

impl MarkerHandler {
    pub fn new(spec: &MarkerSpec) -> Self {
        Self {
            key: spec.key,
            revealed: false,
            message: spec.message.to_string(),
        }
    }

    /// Marks the marker revealed. Never clears the flag.
    pub fn reveal(&mut self) -> bool {
        let first = !self.revealed;
        self.revealed = true;
        first
    }
}

pub const SKILLS_MESSAGE: &str = "I have the knowledge of Web Development(HTML, CSS, JS, Node js), programming languages: Python, C++, C.\n Level 3: \u{1F4CD}Find a yellow ball (hint:Street light)";
pub const REWARD_MESSAGE: &str =
    "Congratulations on unloacking all the levels.\n Here, you go!\u{1F3C6}\u{1F3C5}";
pub const INTRO_MESSAGE: &str = "Hii! My name is Pallavi Singh. \n Currently I'm pursuing M.Sc in Informatics from Institute of Informatics and Communication, University of Delhi.I am a Tech Fanatic Guy. \n Level 2: \u{1F4CD}Find a red ball (hint: Observe the Car)";
pub const PROJECTS_MESSAGE: &str = "I have worked on project of FullStack Web Development, ML and DS.\n Exploring Google Cloud now!\n Level 4: \u{1F4CD}Find a green ball and collect your rewards\u{1F389} (hint:look at roofs)";

// Each marker owns its scale; no constructor touches another marker.
pub const DEFAULT_MARKERS: [MarkerSpec; 4] = [
    MarkerSpec {
        key: "hiddenObject1",
        position: [2.1, -0.7, 0.7],
        radius: 0.2,
        scale: 0.1,
        width_segments: 32,
        height_segments: 32,
        color: [1.0, 0.0, 0.0], // red
        message: SKILLS_MESSAGE,
    },
    MarkerSpec {
        key: "hiddenObject2",
        position: [0.45, 0.0, -1.26],
        radius: 0.42,
        scale: 0.12,
        width_segments: 20,
        height_segments: 20,
        color: [0.0, 1.0, 0.0], // green
        message: REWARD_MESSAGE,
    },
    MarkerSpec {
        key: "hiddenObject3",
        position: [1.0, -0.8, -0.5],
        radius: 0.04,
        scale: 1.0,
        width_segments: 8,
        height_segments: 8,
        color: [0.0, 0.0, 1.0], // blue
        message: INTRO_MESSAGE,
    },
    MarkerSpec {
        key: "hiddenObject4",
        position: [-1.9, 1.15, -2.7],
        radius: 0.02,
        scale: 1.0,
        width_segments: 6,
        height_segments: 6,
        color: [1.0, 1.0, 0.0], // yellow
        message: PROJECTS_MESSAGE,
    },
];
