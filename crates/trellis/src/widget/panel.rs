//! A plain container widget.

use trellis_core::SkinSource;

use super::base;
use super::context::EventCtx;
use super::draw::{DrawCtx, VisualState};
use super::traits::{DragTarget, Drawable, Hittable, KeyTarget, Lifecycle, PointerTarget};

/// A container whose hooks all run the base behaviour.
///
/// A panel draws its own region and then its children. When given a skin
/// section it reads these keys from it during [`apply_skin`]:
///
/// | key       | type | effect                          |
/// |-----------|------|---------------------------------|
/// | `rect`    | rect | `left top right bottom` geometry |
/// | `visible` | bool | visibility                      |
/// | `enabled` | bool | enabled state                   |
///
/// Missing keys leave the current value untouched.
///
/// [`apply_skin`]: crate::widget::WidgetTree::apply_skin
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Panel {
    section: Option<String>,
}

impl Panel {
    pub fn new() -> Self {
        Self::default()
    }

    /// A panel configured from the given skin section.
    pub fn with_section(section: impl Into<String>) -> Self {
        Self {
            section: Some(section.into()),
        }
    }

    /// The skin section this panel reads, if any.
    pub fn section(&self) -> Option<&str> {
        self.section.as_deref()
    }
}

impl Hittable for Panel {}

impl Drawable for Panel {
    fn draw(&self, dcx: &mut DrawCtx<'_>, x: f32, y: f32, state: VisualState) {
        let region = dcx.region(x, y);
        dcx.draw_region(region, &state);
        base::draw(dcx, x, y, state);
    }
}

impl PointerTarget for Panel {}
impl KeyTarget for Panel {}
impl DragTarget for Panel {}

impl Lifecycle for Panel {
    fn apply_skin(&mut self, ecx: &mut EventCtx<'_>, skin: &dyn SkinSource) {
        let Some(section) = self.section.as_deref() else {
            return;
        };

        let current = ecx.rect();
        let rect = skin.get_rect(section, "rect", current);
        if rect != current {
            base::set_rect(ecx, rect.left(), rect.top(), rect.width(), rect.height());
        }

        let visible = ecx.tree().is_visible(ecx.id());
        base::set_visible(ecx, skin.get_bool(section, "visible", visible));

        let enabled = ecx.tree().is_enabled(ecx.id());
        let wanted = skin.get_bool(section, "enabled", enabled);
        if wanted != enabled {
            let id = ecx.id();
            let (tree, cx) = ecx.parts();
            // Goes through the tree so a focus holder inside loses focus.
            if let Err(reason) = tree.set_enabled(cx, id, wanted) {
                tracing::debug!(target: "trellis::skin", section, %reason, "enabled not applied");
            }
        }

        tracing::trace!(target: "trellis::skin", section, ?rect, "panel skinned");
    }
}
