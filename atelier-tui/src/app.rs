//! The event loop: terminal input, fetch results and rendering.

use std::sync::Arc;

use atelier_dom::{
    hit_test, Color, Edges, Element, Event, Key, LayoutResult, Modifiers, MouseButton, ResizeBus,
    Size, Style, Terminal,
};
use atelier_grid::{Breakpoint, ResizeViewport};
use crossterm::event::EventStream;
use futures::StreamExt;
use log::{debug, info, warn};
use tokio::sync::mpsc::{self, UnboundedReceiver};

use crate::catalog::{Course, Product, SqliteCatalog};
use crate::error::AppError;
use crate::screens::columns::{course_columns, describe_course, describe_product, product_columns};
use crate::screens::{AppMessage, Effects, Fetch, ListScreen, Screen};
use crate::settings::SettingsProvider;

const ACCENT: Color = Color::hex(0xA277FF);
const MUTED: Color = Color::hex(0x6C6C80);

const HELP: &str =
    "Tab switch | / search | [ ] page | m mode | j k scroll | + - breakpoint | Esc close | q quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Courses,
    Products,
}

impl Tab {
    const ALL: [Tab; 2] = [Tab::Courses, Tab::Products];

    fn element_id(self) -> &'static str {
        match self {
            Tab::Courses => "tab-courses",
            Tab::Products => "tab-products",
        }
    }

    fn from_element_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.element_id() == id)
    }

    fn next(self) -> Self {
        match self {
            Tab::Courses => Tab::Products,
            Tab::Products => Tab::Courses,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

enum Next {
    Terminal(Option<std::io::Result<crossterm::event::Event>>),
    Message(AppMessage),
}

pub struct App {
    courses: ListScreen<Course>,
    products: ListScreen<Product>,
    active: Tab,
    settings: SettingsProvider,
    receiver: UnboundedReceiver<AppMessage>,
    resize: ResizeBus,
}

impl App {
    /// Build both screens from the stored preferences.
    pub async fn new(catalog: SqliteCatalog, settings: SettingsProvider) -> Result<Self, AppError> {
        let (sender, receiver) = mpsc::unbounded_channel();
        let catalog = Arc::new(catalog);

        let courses = ListScreen::new(
            "courses",
            "Courses",
            course_columns()?,
            catalog.clone(),
            sender.clone(),
            AppMessage::Courses,
        )
        .with_preferences(settings.preferences("courses").await?)
        .describe(describe_course);

        let products = ListScreen::new(
            "products",
            "Products",
            product_columns()?,
            catalog,
            sender,
            AppMessage::Products,
        )
        .with_preferences(settings.preferences("products").await?)
        .describe(describe_product);

        Ok(Self {
            courses,
            products,
            active: Tab::Courses,
            settings,
            receiver,
            resize: ResizeBus::new(),
        })
    }

    fn screen(&self) -> &dyn Screen {
        match self.active {
            Tab::Courses => &self.courses,
            Tab::Products => &self.products,
        }
    }

    fn screen_mut(&mut self) -> &mut dyn Screen {
        match self.active {
            Tab::Courses => &mut self.courses,
            Tab::Products => &mut self.products,
        }
    }

    fn breakpoint(&self) -> Breakpoint {
        Breakpoint::new(self.screen().preferences().breakpoint)
    }

    pub async fn run(mut self) -> Result<(), AppError> {
        let mut terminal = Terminal::new()?;
        let (width, _) = terminal.size();
        let mut viewport = ResizeViewport::attach(&self.resize, width, self.breakpoint());
        let mut events = EventStream::new();

        self.courses.fetch(Fetch::Replace);
        self.products.fetch(Fetch::Replace);
        info!("app started on the {:?} screen", self.active);

        loop {
            let root = self.view(&viewport);
            let layout = terminal.render(&root)?;
            let effects = self.screen_mut().after_layout(layout, &viewport);
            self.run_effects(effects, &mut viewport);

            let next = tokio::select! {
                event = events.next() => Next::Terminal(event),
                Some(message) = self.receiver.recv() => Next::Message(message),
            };

            match next {
                Next::Terminal(Some(Ok(raw))) => {
                    let Some(event) = Event::from_crossterm(raw) else {
                        continue;
                    };
                    debug!("event: {event:?}");
                    let flow = self.handle_event(event, &root, terminal.layout(), &mut viewport);
                    if flow == Flow::Quit {
                        break;
                    }
                }
                Next::Terminal(Some(Err(e))) => warn!("event stream error: {e}"),
                Next::Terminal(None) => break,
                Next::Message(message) => self.receive(message),
            }
        }

        info!("app exiting");
        Ok(())
    }

    fn handle_event(
        &mut self,
        event: Event,
        root: &Element,
        layout: &LayoutResult,
        viewport: &mut ResizeViewport,
    ) -> Flow {
        match event {
            Event::Key { key, modifiers } => return self.handle_key(key, modifiers, viewport),
            Event::Click {
                x,
                y,
                button: MouseButton::Left,
            } => {
                if let Some(id) = hit_test(layout, root, x, y)
                    && let Some(tab) = Tab::from_element_id(&id)
                {
                    self.switch_to(tab, viewport);
                    return Flow::Continue;
                }
                let effects = self.screen_mut().click(root, layout, x, y);
                self.run_effects(effects, viewport);
            }
            Event::Click { .. } => {}
            Event::Scroll { delta, .. } => self.screen_mut().scroll(delta),
            Event::Resize { width, height } => {
                debug!("terminal resized to {width}x{height}");
                self.resize.emit(width, height);
            }
        }
        Flow::Continue
    }

    fn handle_key(&mut self, key: Key, modifiers: Modifiers, viewport: &mut ResizeViewport) -> Flow {
        if modifiers.ctrl && key == Key::Char('c') {
            return Flow::Quit;
        }

        if !self.screen().captures_keys() {
            match key {
                Key::Char('q') => return Flow::Quit,
                Key::Tab | Key::BackTab => {
                    self.switch_to(self.active.next(), viewport);
                    return Flow::Continue;
                }
                _ => {}
            }
        }

        if let Some(effects) = self.screen_mut().handle_key(key) {
            self.run_effects(effects, viewport);
        }
        Flow::Continue
    }

    fn switch_to(&mut self, tab: Tab, viewport: &mut ResizeViewport) {
        if tab == self.active {
            return;
        }
        self.active = tab;
        viewport.set_breakpoint(self.breakpoint());
        debug!("switched to {tab:?}");
    }

    fn run_effects(&mut self, effects: Effects, viewport: &mut ResizeViewport) {
        if let Some(kind) = effects.fetch {
            self.screen_mut().fetch(kind);
        }
        if effects.preferences_changed {
            let preferences = self.screen().preferences();
            let key = self.screen().key();
            viewport.set_breakpoint(self.breakpoint());

            let settings = self.settings.clone();
            tokio::spawn(async move {
                if let Err(e) = settings.save_preferences(key, &preferences).await {
                    log::error!("failed to save preferences for '{key}': {e}");
                }
            });
        }
    }

    fn receive(&mut self, message: AppMessage) {
        match message {
            AppMessage::Courses(fetched) => self.courses.receive(fetched),
            AppMessage::Products(fetched) => self.products.receive(fetched),
        }
    }

    fn view(&self, viewport: &ResizeViewport) -> Element {
        Element::col()
            .id("app")
            .width(Size::Fill)
            .height(Size::Fill)
            .padding(Edges::horizontal(1))
            .gap(1)
            .child(self.tab_bar())
            .child(self.screen().view(viewport))
            .child(
                Element::text(HELP)
                    .id("help")
                    .style(Style::new().foreground(MUTED).dim()),
            )
    }

    fn tab_bar(&self) -> Element {
        let tabs = Tab::ALL.into_iter().map(|tab| {
            let title = match tab {
                Tab::Courses => self.courses.title(),
                Tab::Products => self.products.title(),
            };
            let style = if tab == self.active {
                Style::new().foreground(ACCENT).bold().underline()
            } else {
                Style::new().foreground(MUTED)
            };
            Element::text(title).id(tab.element_id()).clickable(true).style(style)
        });

        Element::row()
            .id("tabs")
            .width(Size::Fill)
            .gap(2)
            .child(
                Element::text("Atelier")
                    .id("brand")
                    .style(Style::new().bold()),
            )
            .children(tabs)
    }
}
