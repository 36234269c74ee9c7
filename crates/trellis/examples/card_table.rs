//! Drags a card between two piles and prints the tree along the way.
//!
//! Run with `cargo run -p trellis --example card_table`. Set the level to
//! `TRACE` below to see every dispatch.

use trellis::widget::{
    DragArgs, DragTarget, DrawCtx, Drawable, EventCtx, Hittable, KeyTarget, Lifecycle, Panel,
    PointerTarget, Renderer, TreeDebug, TreeFormatOptions, VisualState,
};
use trellis::{InputEvent, InteractionContext, NodeId, Rect, Skin, Variant, WidgetTree};

/// A pile of cards. Pressing on it starts dragging the top card.
struct Pile {
    cards: Vec<&'static str>,
}

impl Hittable for Pile {}
impl KeyTarget for Pile {}
impl Lifecycle for Pile {}

impl Drawable for Pile {
    fn draw(&self, dcx: &mut DrawCtx<'_>, x: f32, y: f32, state: VisualState) {
        let region = dcx.region(x, y);
        dcx.draw_region(region, &state);
    }
}

impl PointerTarget for Pile {
    fn left_button_down(&mut self, ecx: &mut EventCtx<'_>, _x: f32, _y: f32) -> bool {
        match self.cards.last() {
            Some(&card) => ecx.begin_drag(Variant::new(card)).is_ok(),
            None => false,
        }
    }
}

impl DragTarget for Pile {
    fn left_drop(&mut self, ecx: &mut EventCtx<'_>, _x: f32, _y: f32, args: &DragArgs) -> bool {
        let Some(&card) = args.payload.downcast::<&'static str>() else {
            return false;
        };
        let Some(source) = args.source.filter(|&s| s != ecx.id()) else {
            return false;
        };
        // Move, not copy: take the card off the source pile.
        if let Some(from) = ecx.widget_mut::<Pile>(source) {
            from.cards.pop();
        }
        self.cards.push(card);
        true
    }
}

struct Printer;

impl Renderer for Printer {
    fn draw_region(&mut self, region: Rect, state: &VisualState) {
        println!(
            "  region {}x{} at {},{}{}",
            region.width(),
            region.height(),
            region.left(),
            region.top(),
            if state.highlighted { " (highlighted)" } else { "" }
        );
    }
}

const SKIN: &str = "
[table]
rect = 0 0 299 199
";

fn main() -> trellis::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut cx = InteractionContext::new();
    let mut tree = WidgetTree::new();

    let table = tree.insert_named("table", Panel::with_section("table"));
    let left = pile(&mut tree, &mut cx, table, "left", vec!["ace", "king"], 10.0)?;
    let right = pile(&mut tree, &mut cx, table, "right", Vec::new(), 160.0)?;

    let skin = Skin::parse(SKIN)?;
    tree.apply_skin(&mut cx, table, &skin)?;

    let script = [
        InputEvent::PointerMove { x: 50.0, y: 50.0, dx: 0.0, dy: 0.0 },
        InputEvent::PointerDown { button: 1, x: 50.0, y: 50.0 },
        InputEvent::PointerMove { x: 200.0, y: 60.0, dx: 150.0, dy: 10.0 },
        InputEvent::PointerUp { button: 1, x: 200.0, y: 60.0 },
    ];
    for event in &script {
        let result = tree.dispatch(&mut cx, table, event);
        println!("{event:?} -> {result:?}");
    }

    println!("{}", TreeDebug::with_options(&tree, TreeFormatOptions::detailed()).with_interaction(&cx));
    tree.draw(table, &mut Printer);

    for (name, id) in [("left", left), ("right", right)] {
        let cards = tree.widget::<Pile>(id).map(|p| p.cards.join(", "));
        println!("{name}: [{}]", cards.unwrap_or_default());
    }
    Ok(())
}

fn pile(
    tree: &mut WidgetTree,
    cx: &mut InteractionContext,
    table: NodeId,
    name: &str,
    cards: Vec<&'static str>,
    x: f32,
) -> trellis::Result<NodeId> {
    let id = tree.insert_named(name, Pile { cards });
    tree.add_child(table, id, None)?;
    tree.set_rect(cx, id, x, 10.0, 120.0, 160.0)?;
    Ok(id)
}
