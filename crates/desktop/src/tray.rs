use tray_icon::menu::{CheckMenuItem, Menu, MenuId, MenuItem, PredefinedMenuItem, Submenu};
use tray_icon::{Icon, TrayIcon, TrayIconBuilder};

use darkmode_core::icon::domain::icon_style::IconStyle;
use darkmode_core::shared::theme_scope::ThemeScope;

use crate::labels;

/// What a context-menu entry asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Toggle(ThemeScope),
    SetIconStyle(IconStyle),
    RestartAsAdmin,
    Exit,
}

/// The context menu plus the ids needed to route its events.
///
/// The menu items must outlive the tray icon, so this is kept next to it.
pub struct TrayMenu {
    menu: Menu,
    toggle_ids: Vec<(MenuId, ThemeScope)>,
    style_items: Vec<(CheckMenuItem, IconStyle)>,
    restart_id: Option<MenuId>,
    exit_id: MenuId,
}

impl TrayMenu {
    /// Builds the menu. "Restart as Administrator" is only offered when the
    /// process is not already elevated.
    pub fn new(
        icon_style: IconStyle,
        elevated: bool,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let menu = Menu::new();

        let mut toggle_ids = Vec::new();
        for &scope in ThemeScope::ALL {
            let item = MenuItem::new(labels::toggle_label(scope), true, None);
            menu.append(&item)?;
            toggle_ids.push((item.id().clone(), scope));
        }
        menu.append(&PredefinedMenuItem::separator())?;

        let style_menu = Submenu::new(labels::ICON_STYLE_MENU, true);
        let mut style_items = Vec::new();
        for &style in IconStyle::ALL {
            let item = CheckMenuItem::new(style.label(), true, style == icon_style, None);
            style_menu.append(&item)?;
            style_items.push((item, style));
        }
        menu.append(&style_menu)?;
        menu.append(&PredefinedMenuItem::separator())?;

        let restart_id = if elevated {
            None
        } else {
            let item = MenuItem::new(labels::RESTART_AS_ADMIN, true, None);
            menu.append(&item)?;
            menu.append(&PredefinedMenuItem::separator())?;
            Some(item.id().clone())
        };

        let exit = MenuItem::new(labels::EXIT, true, None);
        menu.append(&exit)?;

        Ok(Self {
            menu,
            toggle_ids,
            style_items,
            restart_id,
            exit_id: exit.id().clone(),
        })
    }

    pub fn action_for(&self, id: &MenuId) -> Option<MenuAction> {
        if let Some((_, scope)) = self.toggle_ids.iter().find(|(item, _)| item == id) {
            return Some(MenuAction::Toggle(*scope));
        }
        if let Some((_, style)) = self.style_items.iter().find(|(item, _)| item.id() == id) {
            return Some(MenuAction::SetIconStyle(*style));
        }
        if self.restart_id.as_ref() == Some(id) {
            return Some(MenuAction::RestartAsAdmin);
        }
        if *id == self.exit_id {
            return Some(MenuAction::Exit);
        }
        None
    }

    /// Ticks the entry for `selected`. Check items toggle themselves on click,
    /// so this also re-ticks an entry the user clicked twice.
    pub fn check_icon_style(&self, selected: IconStyle) {
        for (item, style) in &self.style_items {
            item.set_checked(*style == selected);
        }
    }

    /// Creates the tray icon. The menu opens on right click only; left clicks
    /// are delivered as tray events.
    pub fn build_tray(
        &self,
        icon: Icon,
        tooltip: &str,
    ) -> Result<TrayIcon, Box<dyn std::error::Error>> {
        let tray = TrayIconBuilder::new()
            .with_menu(Box::new(self.menu.clone()))
            .with_tooltip(tooltip)
            .with_icon(icon)
            .with_menu_on_left_click(false)
            .build()?;
        Ok(tray)
    }
}
