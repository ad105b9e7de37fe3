use crate::body_direction::BodyDirectionPipeline;
use crate::face_direction::FaceDirectionPipeline;
use crate::pipeline::DirectionPipeline;

/// Host-facing contract for one registered classifier.
#[derive(Debug, Clone, Copy)]
pub struct NodeSpec {
    /// Stable identifier a host graph uses to look the node up.
    pub id: &'static str,
    pub display_name: &'static str,
    pub input_name: &'static str,
    pub input_type: &'static str,
    pub output_names: [&'static str; 2],
    /// Hosts with cached graph execution must re-run the node every tick.
    pub always_changed: bool,
}

struct Node {
    spec: NodeSpec,
    build: fn() -> Box<dyn DirectionPipeline>,
}

pub struct Registry {
    nodes: Vec<Node>,
}

impl Registry {
    /// The two built-in strategies. Both consume the same input shape and
    /// honor the same output contract.
    pub fn with_builtin() -> Self {
        let mut registry = Self { nodes: Vec::new() };
        registry.register(
            NodeSpec {
                id: "face",
                display_name: "Get Direction (Face Geometry)",
                input_name: "pose_kps",
                input_type: "POSE_KEYPOINT",
                output_names: ["direction", "direction_code"],
                always_changed: true,
            },
            || Box::new(FaceDirectionPipeline),
        );
        registry.register(
            NodeSpec {
                id: "body",
                display_name: "Get Direction (Body Pose)",
                input_name: "pose_kps",
                input_type: "POSE_KEYPOINT",
                output_names: ["direction", "direction_code"],
                always_changed: true,
            },
            || Box::new(BodyDirectionPipeline),
        );
        registry
    }

    pub fn register(&mut self, spec: NodeSpec, build: fn() -> Box<dyn DirectionPipeline>) {
        self.nodes.push(Node { spec, build });
    }

    pub fn build(&self, id: &str) -> Option<Box<dyn DirectionPipeline>> {
        self.nodes.iter().find(|n| n.spec.id == id).map(|n| (n.build)())
    }

    pub fn spec(&self, id: &str) -> Option<&NodeSpec> {
        self.nodes.iter().find(|n| n.spec.id == id).map(|n| &n.spec)
    }

    pub fn specs(&self) -> impl Iterator<Item = &NodeSpec> {
        self.nodes.iter().map(|n| &n.spec)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::with_builtin()
    }
}
