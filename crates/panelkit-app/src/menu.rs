//! Keyboard/gamepad menu navigation.
//!
//! A [`MenuNavigator`] holds a stack of open menus, each with its own
//! selection. Directional commands skip disabled items and wrap around;
//! selecting an item either activates it or opens its submenu.

/// What selecting an item does
#[derive(Debug, Clone, PartialEq)]
pub enum MenuAction {
    /// Report the item id to the caller
    Activate,
    /// Open a nested menu
    Open(Menu),
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub id: String,
    pub label: String,
    pub enabled: bool,
    pub action: MenuAction,
}

impl MenuItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            enabled: true,
            action: MenuAction::Activate,
        }
    }

    pub fn submenu(id: impl Into<String>, label: impl Into<String>, menu: Menu) -> Self {
        Self {
            action: MenuAction::Open(menu),
            ..Self::new(id, label)
        }
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Menu {
    pub title: String,
    pub items: Vec<MenuItem>,
}

impl Menu {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            items: Vec::new(),
        }
    }

    pub fn with_item(mut self, item: MenuItem) -> Self {
        self.items.push(item);
        self
    }

    fn first_enabled(&self) -> Option<usize> {
        self.items.iter().position(|item| item.enabled)
    }

    /// Next enabled item after `from` in direction `step`, wrapping around
    fn step_enabled(&self, from: usize, step: isize) -> Option<usize> {
        let len = self.items.len() as isize;
        (1..=len)
            .map(|offset| (from as isize + step * offset).rem_euclid(len) as usize)
            .find(|&index| self.items[index].enabled)
    }
}

/// Input understood by the navigator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Up,
    Down,
    Select,
    Back,
}

/// Outcome of a command that changed something
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEvent {
    SelectionChanged { menu: String, index: usize },
    Activated(String),
    Opened(String),
    Closed(String),
}

#[derive(Debug, Clone)]
struct OpenMenu {
    menu: Menu,
    selected: Option<usize>,
}

impl OpenMenu {
    fn new(menu: Menu) -> Self {
        let selected = menu.first_enabled();
        Self { menu, selected }
    }
}

/// Menu stack driven by [`MenuCommand`]s
#[derive(Debug, Clone)]
pub struct MenuNavigator {
    stack: Vec<OpenMenu>,
}

impl MenuNavigator {
    pub fn new(root: Menu) -> Self {
        Self {
            stack: vec![OpenMenu::new(root)],
        }
    }

    /// False once the root menu has been backed out of
    pub fn is_open(&self) -> bool {
        !self.stack.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn current_menu(&self) -> Option<&Menu> {
        self.stack.last().map(|open| &open.menu)
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.stack.last().and_then(|open| open.selected)
    }

    pub fn selected_item(&self) -> Option<&MenuItem> {
        let open = self.stack.last()?;
        open.menu.items.get(open.selected?)
    }

    /// Apply `command`; returns `None` when nothing changed
    pub fn handle(&mut self, command: MenuCommand) -> Option<MenuEvent> {
        let event = match command {
            MenuCommand::Up => self.move_selection(-1),
            MenuCommand::Down => self.move_selection(1),
            MenuCommand::Select => self.select(),
            MenuCommand::Back => self.back(),
        };
        if let Some(event) = &event {
            log::debug!("menu {command:?} -> {event:?}");
        }
        event
    }

    fn move_selection(&mut self, step: isize) -> Option<MenuEvent> {
        let open = self.stack.last_mut()?;
        let from = open.selected?;
        let next = open.menu.step_enabled(from, step)?;
        if next == from {
            return None;
        }
        open.selected = Some(next);
        Some(MenuEvent::SelectionChanged {
            menu: open.menu.title.clone(),
            index: next,
        })
    }

    fn select(&mut self) -> Option<MenuEvent> {
        let item = self.selected_item()?;
        if !item.enabled {
            return None;
        }
        match &item.action {
            MenuAction::Activate => Some(MenuEvent::Activated(item.id.clone())),
            MenuAction::Open(menu) => {
                let menu = menu.clone();
                let title = menu.title.clone();
                self.stack.push(OpenMenu::new(menu));
                Some(MenuEvent::Opened(title))
            }
        }
    }

    fn back(&mut self) -> Option<MenuEvent> {
        let closed = self.stack.pop()?;
        Some(MenuEvent::Closed(closed.menu.title))
    }
}
