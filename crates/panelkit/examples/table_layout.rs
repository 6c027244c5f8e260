//! Builds a settings screen with a table panel and an anchored footer, resizes
//! it, and prints the recorded draw commands

use panelkit::{
    css, AnchorStyle, BevelBorder, CellPosition, ContentAlignment, DebugOptions, DrawList,
    Element, FontId, Gui, Label, ListBox, Padding, Placement, Rect, SolidBorder, TrackStyle,
};

fn main() -> Result<(), panelkit::TreeError> {
    env_logger::init();

    let mut gui = Gui::new(Rect::new(0, 0, 800, 600));
    let root = gui.root();

    let screen = gui.add(
        root,
        Element::anchored_panel()
            .with_name("screen")
            .with_bounds(Rect::new(0, 0, 800, 600))
            .with_back_colour(css::NAVY)
            .with_padding(Padding::all(10)),
        Placement::Free,
    )?;

    let table = gui.add(
        screen,
        Element::table(
            vec![
                TrackStyle::px(50),
                TrackStyle::percent(50.0),
                TrackStyle::clamped(50.0, -1, 300),
            ],
            vec![TrackStyle::px(40), TrackStyle::percent(100.0)],
        )
        .with_name("settings")
        .with_bounds(Rect::new(0, 0, 780, 520))
        .with_border(BevelBorder::new(css::SILVER, css::GRAY, 3)),
        Placement::Anchored(AnchorStyle::ALL),
    )?;

    gui.add(
        table,
        Element::widget(
            Label::new("Settings", FontId(0)).with_alignment(ContentAlignment::MiddleCenter),
        )
        .with_name("title"),
        Placement::Cell(CellPosition::new(0, 0).with_span(3, 1)),
    )?;
    gui.add(
        table,
        Element::widget(
            ListBox::new(FontId(0)).with_items(["Audio", "Video", "Controls", "Back"]),
        )
        .with_name("categories")
        .with_border(SolidBorder::new(css::WHITE, 1)),
        Placement::Cell(CellPosition::new(1, 1)),
    )?;

    gui.add(
        screen,
        Element::widget(Label::new("v0.7", FontId(0)).with_alignment(ContentAlignment::BottomRight))
            .with_name("version")
            .with_bounds(Rect::new(680, 540, 100, 40)),
        Placement::Anchored(AnchorStyle::BOTTOM_RIGHT),
    )?;

    println!("columns at 800x600: {:?}", gui.column_widths(table));
    let size = glam::IVec2::new(1024, 768);
    gui.resize(size);
    gui.set_size(screen, size);
    println!("columns at 1024x768: {:?}", gui.column_widths(table));

    if let Some(version) = gui.find("version") {
        println!("version label at {:?}", gui.screen_bounds(version));
    }

    gui.set_debug_options(DebugOptions::none().with_content_area(true));
    let mut list = DrawList::new(size);
    gui.draw(&mut list);

    for command in list.commands() {
        println!("{:?} clipped to {:?}", command.command, command.clip_rect);
    }

    Ok(())
}
