use std::time::Instant;

use tray_icon::menu::MenuEvent;
use tray_icon::{Icon, MouseButton, MouseButtonState, TrayIcon, TrayIconEvent};
use winit::application::ApplicationHandler;
use winit::event::{StartCause, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::WindowId;

use darkmode_core::icon::domain::icon_set::IconSet;
use darkmode_core::icon::domain::icon_style::IconStyle;
use darkmode_core::icon::infrastructure::renderer_factory::create_renderer;
use darkmode_core::shared::theme_scope::ThemeScope;
use darkmode_core::theme::domain::privilege_broker::PrivilegeBroker;
use darkmode_core::theme::infrastructure::platform_factory::{
    create_privilege_broker, create_shell_notifier, create_theme_store,
};
use darkmode_core::toggle::toggle_theme_use_case::ThemeToggler;

use crate::dialogs::{self, Notice};
use crate::labels;
use crate::settings::Settings;
use crate::tray::{MenuAction, TrayMenu};

// ---------------------------------------------------------------------------
// UserEvent
// ---------------------------------------------------------------------------

/// Tray and menu events, forwarded from the tray-icon handlers into the
/// event loop.
#[derive(Debug)]
pub enum UserEvent {
    Tray(TrayIconEvent),
    Menu(MenuEvent),
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    settings: Settings,
    toggler: ThemeToggler,
    broker: Box<dyn PrivilegeBroker>,
    elevated: bool,
    icons: IconSet,
    menu: Option<TrayMenu>,
    tray: Option<TrayIcon>,
}

impl App {
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let settings = Settings::load();
        let broker = create_privilege_broker();
        let elevated = broker.is_elevated();
        let mut toggler = ThemeToggler::new(create_theme_store()?, create_shell_notifier(true));

        if let Err(e) = toggler.refresh() {
            log::error!("Failed to read theme setting: {e}");
            dialogs::show(&Notice::ReadFailed(e.to_string()));
        }
        log::info!(
            "Starting in {} ({})",
            toggler.mode(),
            if elevated { "elevated" } else { "not elevated" }
        );

        Ok(Self {
            icons: IconSet::new(create_renderer(settings.icon_style).as_ref()),
            settings,
            toggler,
            broker,
            elevated,
            menu: None,
            tray: None,
        })
    }

    /// Runs the tray until the user picks Exit.
    pub fn run(mut self) -> Result<(), Box<dyn std::error::Error>> {
        let event_loop = EventLoop::<UserEvent>::with_user_event().build()?;

        let proxy = event_loop.create_proxy();
        TrayIconEvent::set_event_handler(Some(move |event| {
            let _ = proxy.send_event(UserEvent::Tray(event));
        }));
        let proxy = event_loop.create_proxy();
        MenuEvent::set_event_handler(Some(move |event| {
            let _ = proxy.send_event(UserEvent::Menu(event));
        }));

        event_loop.run_app(&mut self)?;
        Ok(())
    }

    fn create_tray(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let menu = TrayMenu::new(self.settings.icon_style, self.elevated)?;
        let tray = menu.build_tray(self.current_icon()?, &self.tooltip())?;
        self.menu = Some(menu);
        self.tray = Some(tray);
        Ok(())
    }

    fn current_icon(&self) -> Result<Icon, Box<dyn std::error::Error>> {
        let image = self.icons.icon_for(self.toggler.mode());
        Ok(Icon::from_rgba(image.as_raw().clone(), image.width(), image.height())?)
    }

    fn tooltip(&self) -> String {
        labels::tooltip(self.toggler.mode(), self.elevated)
    }

    /// Redraws the icon and tooltip for the tracked mode.
    fn update_tray(&self) {
        let Some(tray) = &self.tray else { return };
        match self.current_icon() {
            Ok(icon) => {
                if let Err(e) = tray.set_icon(Some(icon)) {
                    log::warn!("Failed to update tray icon: {e}");
                }
            }
            Err(e) => log::warn!("Failed to build tray icon: {e}"),
        }
        if let Err(e) = tray.set_tooltip(Some(self.tooltip())) {
            log::warn!("Failed to update tray tooltip: {e}");
        }
    }

    fn schedule_poll(&self, event_loop: &ActiveEventLoop) {
        let deadline = self
            .settings
            .poll_system_theme
            .then(|| Instant::now().checked_add(self.settings.poll_interval()))
            .flatten();
        match deadline {
            Some(deadline) => event_loop.set_control_flow(ControlFlow::WaitUntil(deadline)),
            None => event_loop.set_control_flow(ControlFlow::Wait),
        }
    }

    fn poll_theme(&mut self) {
        match self.toggler.refresh() {
            Ok(true) => self.update_tray(),
            Ok(false) => {}
            Err(e) => log::warn!("Failed to poll theme setting: {e}"),
        }
    }

    fn toggle(&mut self, event_loop: &ActiveEventLoop, scope: ThemeScope) {
        match self.toggler.toggle(scope) {
            Ok(change) => {
                self.update_tray();
                if let Some(e) = change.notify_error {
                    dialogs::show(&Notice::NotifyFailed(e.to_string()));
                }
            }
            Err(e) => {
                log::error!("Failed to change theme: {e}");
                // A failed second write can leave the values out of step.
                self.poll_theme();
                let notice = Notice::for_write_error(&e, self.elevated);
                if dialogs::show(&notice) {
                    self.restart_elevated(event_loop);
                }
            }
        }
    }

    fn set_icon_style(&mut self, style: IconStyle) {
        if let Some(menu) = &self.menu {
            menu.check_icon_style(style);
        }
        if style == self.settings.icon_style {
            return;
        }
        log::info!("Switching icon style to {style}");
        self.settings.icon_style = style;
        self.settings.save();
        self.icons = IconSet::new(create_renderer(style).as_ref());
        self.update_tray();
    }

    fn restart_elevated(&mut self, event_loop: &ActiveEventLoop) {
        match self.broker.relaunch_elevated() {
            Ok(()) => {
                log::info!("Relaunched elevated; exiting");
                self.exit(event_loop);
            }
            Err(e) => {
                log::error!("{e}");
                dialogs::show(&Notice::ElevationFailed(e.to_string()));
            }
        }
    }

    fn exit(&mut self, event_loop: &ActiveEventLoop) {
        // Dropping the tray removes the notification-area icon.
        self.tray = None;
        self.menu = None;
        event_loop.exit();
    }
}

impl ApplicationHandler<UserEvent> for App {
    fn new_events(&mut self, event_loop: &ActiveEventLoop, cause: StartCause) {
        match cause {
            StartCause::Init => {
                if let Err(e) = self.create_tray() {
                    log::error!("Failed to create tray icon: {e}");
                    event_loop.exit();
                    return;
                }
                self.schedule_poll(event_loop);
            }
            StartCause::ResumeTimeReached { .. } => {
                self.poll_theme();
                self.schedule_poll(event_loop);
            }
            _ => {}
        }
    }

    fn resumed(&mut self, _event_loop: &ActiveEventLoop) {}

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, _id: WindowId, _event: WindowEvent) {}

    fn user_event(&mut self, event_loop: &ActiveEventLoop, event: UserEvent) {
        match event {
            UserEvent::Tray(TrayIconEvent::Click {
                button: MouseButton::Left,
                button_state: MouseButtonState::Up,
                ..
            }) => self.toggle(event_loop, self.settings.click_scope),
            UserEvent::Tray(_) => {}
            UserEvent::Menu(event) => {
                let action = self.menu.as_ref().and_then(|m| m.action_for(&event.id));
                match action {
                    Some(MenuAction::Toggle(scope)) => self.toggle(event_loop, scope),
                    Some(MenuAction::SetIconStyle(style)) => self.set_icon_style(style),
                    Some(MenuAction::RestartAsAdmin) => self.restart_elevated(event_loop),
                    Some(MenuAction::Exit) => self.exit(event_loop),
                    None => log::debug!("Unhandled menu event {:?}", event.id),
                }
            }
        }
    }
}
