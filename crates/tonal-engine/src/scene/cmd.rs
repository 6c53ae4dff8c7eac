use crate::scene::shapes::polygon::PolygonCmd;
use crate::scene::shapes::rect::RectCmd;

/// Renderer-agnostic draw command.
///
/// New shapes get their own module under `scene::shapes` with a payload type
/// and `DrawList` push helpers, plus a variant here.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rect(RectCmd),
    Polygon(PolygonCmd),
}
