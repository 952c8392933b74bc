/// Keys the menu reacts to. Anything else is `Other`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuKey {
    Enter,
    Space,
    Escape,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    Tab,
    Char(char),
    Other,
}

impl MenuKey {
    /// Parse a platform key name such as `"ArrowDown"` or `"a"`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Enter" => MenuKey::Enter,
            " " | "Space" | "Spacebar" => MenuKey::Space,
            "Escape" | "Esc" => MenuKey::Escape,
            "ArrowUp" | "Up" => MenuKey::ArrowUp,
            "ArrowDown" | "Down" => MenuKey::ArrowDown,
            "ArrowLeft" | "Left" => MenuKey::ArrowLeft,
            "ArrowRight" | "Right" => MenuKey::ArrowRight,
            "Home" => MenuKey::Home,
            "End" => MenuKey::End,
            "Tab" => MenuKey::Tab,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => MenuKey::Char(ch),
                    _ => MenuKey::Other,
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub fn any(&self) -> bool {
        self.ctrl || self.alt || self.meta
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyInput {
    pub key: MenuKey,
    pub modifiers: Modifiers,
}

impl KeyInput {
    pub fn new(key: MenuKey) -> Self {
        Self {
            key,
            modifiers: Modifiers::default(),
        }
    }

    pub fn with_modifiers(key: MenuKey, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    pub fn named(name: &str) -> Self {
        Self::new(MenuKey::from_name(name))
    }

    /// The character to search for, if this key press starts a character search.
    pub fn search_char(&self) -> Option<char> {
        match self.key {
            MenuKey::Char(ch) if !self.modifiers.any() && !ch.is_whitespace() && !ch.is_control() => {
                Some(ch)
            }
            _ => None,
        }
    }
}

impl From<MenuKey> for KeyInput {
    fn from(key: MenuKey) -> Self {
        Self::new(key)
    }
}
