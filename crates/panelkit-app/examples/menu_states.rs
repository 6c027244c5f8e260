//! Drives a title menu through a few commands and pushes game states in response

use glam::IVec2;
use panelkit::{css, DrawList, FontId, Point, Surface, TextTransform};
use panelkit_app::{
    interpolate::ease_out, GameState, Interpolator, Menu, MenuCommand, MenuEvent, MenuItem,
    MenuNavigator, StateManager,
};

struct Screen {
    name: &'static str,
    overlay: bool,
    slide: Interpolator<Point>,
}

impl Screen {
    fn new(name: &'static str, overlay: bool) -> Self {
        Self {
            name,
            overlay,
            slide: Interpolator::new(Point::new(-200, 20), Point::new(20, 20), 0.3)
                .with_easing(ease_out),
        }
    }
}

impl GameState for Screen {
    fn update(&mut self, dt: f32) {
        self.slide.update(dt);
    }

    fn draw(&self, surface: &mut dyn Surface) {
        surface.draw_text(
            FontId(0),
            self.name,
            self.slide.value(),
            css::WHITE,
            TextTransform::IDENTITY,
        );
    }

    fn is_overlay(&self) -> bool {
        self.overlay
    }

    fn name(&self) -> &str {
        self.name
    }
}

fn main() {
    env_logger::init();

    let menu = Menu::new("title")
        .with_item(MenuItem::new("play", "Play"))
        .with_item(MenuItem::submenu(
            "options",
            "Options",
            Menu::new("options").with_item(MenuItem::new("volume", "Volume")),
        ))
        .with_item(MenuItem::new("quit", "Quit"));

    let mut navigator = MenuNavigator::new(menu);
    let mut states = StateManager::new();
    states.push(Screen::new("title", false));

    let script = [
        MenuCommand::Down,
        MenuCommand::Select,
        MenuCommand::Back,
        MenuCommand::Up,
        MenuCommand::Select,
    ];
    for command in script {
        match navigator.handle(command) {
            Some(MenuEvent::Opened(_)) => states.push(Screen::new("options", true)),
            Some(MenuEvent::Closed(_)) => {
                if let Err(err) = states.pop() {
                    eprintln!("{err}");
                }
            }
            Some(MenuEvent::Activated(id)) if id == "play" => {
                states.switch_to(Screen::new("level", false));
            }
            other => println!("{command:?}: {other:?}"),
        }
        states.update(0.1);
    }

    let mut list = DrawList::new(IVec2::new(640, 480));
    states.draw(&mut list);
    for (text, position) in list.texts() {
        println!("{text} at {position}");
    }
}
