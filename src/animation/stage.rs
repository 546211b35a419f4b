use std::collections::BTreeMap;

/// Handle to an animatable node owned by a [`Stage`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct NodeId(pub u32);

/// Animatable property channel of a node.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Prop {
    /// Horizontal translation in pixels.
    X,
    /// Vertical translation in pixels.
    Y,
    /// Pointer-driven horizontal offset, added on top of `X`.
    OffsetX,
    /// Pointer-driven vertical offset, added on top of `Y`.
    OffsetY,
    /// Opacity in `[0, 1]`.
    Opacity,
    /// Uniform scale factor.
    Scale,
    /// Rotation in degrees.
    Rotation,
    /// Width as a percentage of the parent (progress bars).
    Width,
}

/// Current property values of one node.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NodeProps {
    /// Horizontal translation in pixels.
    pub x: f64,
    /// Vertical translation in pixels.
    pub y: f64,
    /// Pointer-driven horizontal offset.
    pub offset_x: f64,
    /// Pointer-driven vertical offset.
    pub offset_y: f64,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Uniform scale factor.
    pub scale: f64,
    /// Rotation in degrees.
    pub rotation: f64,
    /// Width percentage.
    pub width: f64,
}

impl Default for NodeProps {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            offset_x: 0.0,
            offset_y: 0.0,
            opacity: 1.0,
            scale: 1.0,
            rotation: 0.0,
            width: 0.0,
        }
    }
}

impl NodeProps {
    /// Read one channel.
    pub fn get(&self, prop: Prop) -> f64 {
        match prop {
            Prop::X => self.x,
            Prop::Y => self.y,
            Prop::OffsetX => self.offset_x,
            Prop::OffsetY => self.offset_y,
            Prop::Opacity => self.opacity,
            Prop::Scale => self.scale,
            Prop::Rotation => self.rotation,
            Prop::Width => self.width,
        }
    }

    /// Write one channel.
    pub fn set(&mut self, prop: Prop, value: f64) {
        let slot = match prop {
            Prop::X => &mut self.x,
            Prop::Y => &mut self.y,
            Prop::OffsetX => &mut self.offset_x,
            Prop::OffsetY => &mut self.offset_y,
            Prop::Opacity => &mut self.opacity,
            Prop::Scale => &mut self.scale,
            Prop::Rotation => &mut self.rotation,
            Prop::Width => &mut self.width,
        };
        *slot = value;
    }

    /// Total horizontal translation (`x + offset_x`).
    pub fn translate_x(&self) -> f64 {
        self.x + self.offset_x
    }

    /// Total vertical translation (`y + offset_y`).
    pub fn translate_y(&self) -> f64 {
        self.y + self.offset_y
    }

    /// CSS `transform` value for this node.
    pub fn css_transform(&self) -> String {
        format!(
            "translate({:.3}px, {:.3}px) scale({:.4}) rotate({:.3}deg)",
            self.translate_x(),
            self.translate_y(),
            self.scale,
            self.rotation
        )
    }
}

/// Owner of every animatable node on the page.
///
/// Each effect mounts the nodes it animates and unmounts them on teardown. Writes addressed to a
/// node that is no longer mounted are dropped, so an in-flight tween can never touch a removed
/// element.
#[derive(Debug, Default)]
pub struct Stage {
    nodes: BTreeMap<NodeId, NodeProps>,
    next: u32,
}

impl Stage {
    /// Create an empty stage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount a node with initial property values.
    pub fn mount(&mut self, props: NodeProps) -> NodeId {
        let id = NodeId(self.next);
        self.next = self.next.wrapping_add(1);
        self.nodes.insert(id, props);
        id
    }

    /// Unmount a node. Returns `false` when it was not mounted.
    pub fn unmount(&mut self, id: NodeId) -> bool {
        self.nodes.remove(&id).is_some()
    }

    /// Return `true` while `id` is mounted.
    pub fn is_mounted(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Current values of a mounted node.
    pub fn get(&self, id: NodeId) -> Option<&NodeProps> {
        self.nodes.get(&id)
    }

    /// Current value of one channel.
    pub fn value(&self, id: NodeId, prop: Prop) -> Option<f64> {
        self.nodes.get(&id).map(|n| n.get(prop))
    }

    /// Write one channel. Returns `false` (and writes nothing) when the node is not mounted.
    pub fn set(&mut self, id: NodeId, prop: Prop, value: f64) -> bool {
        match self.nodes.get_mut(&id) {
            Some(n) => {
                n.set(prop, value);
                true
            }
            None => false,
        }
    }

    /// Number of mounted nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Return `true` when nothing is mounted.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate mounted nodes in id order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &NodeProps)> {
        self.nodes.iter().map(|(id, p)| (*id, p))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/stage.rs"]
mod tests;
