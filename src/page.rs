//! The portfolio page: lays out the sections, routes raylib input to the
//! interaction modules and draws their state every frame.

use log::{debug, info};
use raylib::prelude::*;

use crate::carousel::slide::SlideDeck;
use crate::carousel::Carousel;
use crate::constants::*;
use crate::contact_form::{ContactForm, Field};
use crate::cursor_glow::CursorGlow;
use crate::mobile_menu::MobileMenu;
use crate::navbar::Navbar;
use crate::scroll_reveal::ScrollReveal;
use crate::smooth_scroll::{Anchors, SmoothScroll};

const BACKGROUND: Color = Color { r: 10, g: 10, b: 15, a: 255 };
const CARD: Color = Color { r: 22, g: 22, b: 32, a: 255 };
const ACCENT: Color = Color { r: 99, g: 102, b: 241, a: 255 };
const TEXT: Color = Color { r: 232, g: 232, b: 240, a: 255 };
const MUTED: Color = Color { r: 150, g: 150, b: 170, a: 255 };

const NAV_LINKS: [(&str, &str); 5] = [
    ("About", "#about"),
    ("Skills", "#skills"),
    ("Projects", "#projects"),
    ("Certificates", "#certificates"),
    ("Contact", "#contact"),
];

const SKILLS: [(&str, &str); 3] = [
    ("Languages", "Rust, TypeScript, Python, SQL"),
    ("Systems", "Linux, networking, containers"),
    ("Tools", "Git, CI pipelines, profilers"),
];

const PROJECTS: [(&str, &str); 3] = [
    ("Log Shipper", "Streams structured logs to object storage"),
    ("Tile Server", "Serves vector map tiles from a single binary"),
    ("Budget CLI", "Plain-text budgeting from the terminal"),
];

const ABOUT: [&str; 3] = [
    "I build small, dependable tools and the services behind them.",
    "Most of my time goes into backend work, with a soft spot",
    "for tidy interfaces and fast feedback loops.",
];

// Reveal handles are registered in this order.
const SECTION_COUNT: usize = 5;
const ABOUT_BLOCK: usize = SECTION_COUNT;
const SKILL_BLOCKS: usize = ABOUT_BLOCK + 1;
const PROJECT_BLOCKS: usize = SKILL_BLOCKS + SKILLS.len();
const CONTACT_BLOCK: usize = PROJECT_BLOCKS + PROJECTS.len();

const SECTION_TITLES: [(&str, &str); SECTION_COUNT] = [
    ("about", "About Me"),
    ("skills", "Skills"),
    ("projects", "Projects"),
    ("certificates", "Certificates"),
    ("contact", "Get In Touch"),
];

/// Page-space geometry, recomputed when the window is resized.
#[derive(Debug, Default, Clone)]
struct Layout {
    width: f32,
    viewport: f32,
    content_height: f32,
    mobile: bool,
    hero: Rectangle,
    section_tops: Vec<f32>,
    headers: Vec<Rectangle>,
    about: Rectangle,
    skills: Vec<Rectangle>,
    projects: Vec<Rectangle>,
    carousel: Rectangle,
    contact: Rectangle,
}

impl Layout {
    fn compute(width: i32, height: i32) -> Self {
        let width = width as f32;
        let viewport = height as f32;
        let mobile = (width as i32) < MOBILE_BREAKPOINT;
        let margin = ((width - 1100.0) * 0.5).max(if mobile { 20.0 } else { 40.0 });
        let content_width = width - margin * 2.0;
        let gap = 24.0;

        let mut layout = Layout {
            width,
            viewport,
            mobile,
            hero: Rectangle::new(0.0, 0.0, width, viewport.max(600.0)),
            ..Default::default()
        };

        let mut y = layout.hero.height;
        let section = |layout: &mut Layout, y: f32| {
            layout.section_tops.push(y);
            layout.headers.push(Rectangle::new(margin, y + 80.0, content_width, 50.0));
            y + 160.0
        };

        let body = section(&mut layout, y);
        layout.about = Rectangle::new(margin, body, content_width, 200.0);
        y = body + 200.0 + 80.0;

        let columns = if mobile { 1 } else { 3 };
        let card_width = (content_width - gap * (columns - 1) as f32) / columns as f32;
        let grid = |top: f32, count: usize, card_height: f32| -> (Vec<Rectangle>, f32) {
            let cards = (0..count)
                .map(|i| {
                    let (row, column) = (i / columns, i % columns);
                    Rectangle::new(
                        margin + column as f32 * (card_width + gap),
                        top + row as f32 * (card_height + gap),
                        card_width,
                        card_height,
                    )
                })
                .collect();
            let rows = count.div_ceil(columns);
            (cards, top + rows as f32 * (card_height + gap))
        };

        let body = section(&mut layout, y);
        let (skills, bottom) = grid(body, SKILLS.len(), 180.0);
        layout.skills = skills;
        y = bottom + 60.0;

        let body = section(&mut layout, y);
        let (projects, bottom) = grid(body, PROJECTS.len(), 220.0);
        layout.projects = projects;
        y = bottom + 60.0;

        let body = section(&mut layout, y);
        let carousel_height = (content_width * 0.56).min(420.0);
        layout.carousel = Rectangle::new(margin, body, content_width, carousel_height);
        y = body + carousel_height + 140.0;

        let body = section(&mut layout, y);
        layout.contact = Rectangle::new(margin, body, content_width.min(640.0), 440.0);
        layout.contact.x = margin + (content_width - layout.contact.width) * 0.5;
        y = body + 440.0 + 120.0;

        layout.content_height = y;
        layout
    }

    fn max_scroll(&self) -> f32 {
        (self.content_height - self.viewport).max(0.0)
    }

    fn reveal_blocks(&self) -> Vec<Rectangle> {
        let mut blocks = self.headers.clone();
        blocks.push(self.about);
        blocks.extend(self.skills.iter().copied());
        blocks.extend(self.projects.iter().copied());
        blocks.push(self.contact);
        blocks
    }

    /// Region that pauses the carousel: the slides plus their controls.
    fn carousel_region(&self) -> Rectangle {
        let c = self.carousel;
        Rectangle::new(c.x, c.y, c.width, c.height + 60.0)
    }

    fn prev_button(&self) -> Rectangle {
        let c = self.carousel;
        Rectangle::new(c.x + 12.0, c.y + c.height * 0.5 - 22.0, 44.0, 44.0)
    }

    fn next_button(&self) -> Rectangle {
        let c = self.carousel;
        Rectangle::new(c.x + c.width - 56.0, c.y + c.height * 0.5 - 22.0, 44.0, 44.0)
    }

    fn dot(&self, index: usize, count: usize) -> Vector2 {
        let c = self.carousel;
        let spacing = 24.0;
        let first = c.x + c.width * 0.5 - (count.saturating_sub(1)) as f32 * spacing * 0.5;
        Vector2::new(first + index as f32 * spacing, c.y + c.height + 30.0)
    }

    fn field(&self, field: Field) -> Rectangle {
        let c = self.contact;
        match field {
            Field::Name => Rectangle::new(c.x + 30.0, c.y + 70.0, c.width - 60.0, 44.0),
            Field::Email => Rectangle::new(c.x + 30.0, c.y + 140.0, c.width - 60.0, 44.0),
            Field::Message => Rectangle::new(c.x + 30.0, c.y + 210.0, c.width - 60.0, 120.0),
        }
    }

    fn submit_button(&self) -> Rectangle {
        let c = self.contact;
        Rectangle::new(c.x + 30.0, c.y + 356.0, 220.0, 48.0)
    }

    fn toggle_button(&self) -> Rectangle {
        Rectangle::new(self.width - 64.0, 13.0, 44.0, 44.0)
    }

    fn nav_link(&self, index: usize) -> Rectangle {
        let slot = 130.0;
        let start = self.width - 40.0 - slot * NAV_LINKS.len() as f32;
        Rectangle::new(start + index as f32 * slot, 0.0, slot, NAVBAR_HEIGHT)
    }

    fn menu_link(&self, index: usize) -> Rectangle {
        Rectangle::new(0.0, NAVBAR_HEIGHT + index as f32 * 52.0, self.width, 52.0)
    }
}

fn contains(rect: Rectangle, point: Vector2) -> bool {
    rect.check_collision_point_rec(point)
}

pub struct Page {
    layout: Layout,
    screen: (i32, i32),
    scroll_y: f32,

    deck: SlideDeck,
    carousel: Option<Carousel>,
    carousel_hovered: bool,

    cursor: CursorGlow,
    menu: MobileMenu,
    navbar: Navbar,
    nav_offset: f32,
    reveal: ScrollReveal,
    anchors: Anchors,
    smooth_scroll: SmoothScroll,

    form: ContactForm,
    focused: Option<Field>,
}

impl Page {
    pub fn new(mut deck: SlideDeck, autoplay_interval: f32, touch_device: bool, width: i32, height: i32) -> Self {
        let carousel = Carousel::new(deck.slides.len(), autoplay_interval, &mut deck);
        if carousel.is_none() {
            info!("No certificates to show, carousel disabled");
        }

        let mut page = Self {
            layout: Layout::default(),
            screen: (0, 0),
            scroll_y: 0.0,
            deck,
            carousel,
            carousel_hovered: false,
            cursor: CursorGlow::new(touch_device),
            menu: MobileMenu::new(),
            navbar: Navbar::new(),
            nav_offset: 0.0,
            reveal: ScrollReveal::new(),
            anchors: Anchors::new(),
            smooth_scroll: SmoothScroll::new(),
            form: ContactForm::new(),
            focused: None,
        };
        page.relayout(width, height);
        page
    }

    fn relayout(&mut self, width: i32, height: i32) {
        debug!("Relayout for {}x{}", width, height);
        self.layout = Layout::compute(width, height);
        self.screen = (width, height);

        for (handle, block) in self.layout.reveal_blocks().into_iter().enumerate() {
            if handle < self.reveal.len() {
                self.reveal.relayout(handle, block.y, block.height);
            } else {
                self.reveal.observe(block.y, block.height);
            }
        }

        self.anchors.set("home", 0.0);
        for ((id, _), top) in SECTION_TITLES.iter().zip(self.layout.section_tops.iter()) {
            self.anchors.set(id, *top);
        }

        if !self.layout.mobile {
            self.menu.link_clicked();
        }
        self.scroll_y = self.scroll_y.clamp(0.0, self.layout.max_scroll());
    }

    fn follow_link(&mut self, href: &str) {
        if let Some(destination) = self.anchors.destination(href, self.layout.max_scroll()) {
            self.smooth_scroll.start(self.scroll_y, destination);
        }
    }

    fn to_page(&self, point: Vector2) -> Vector2 {
        Vector2::new(point.x, point.y + self.scroll_y)
    }

    fn to_screen(&self, rect: Rectangle) -> Rectangle {
        Rectangle::new(rect.x, rect.y - self.scroll_y, rect.width, rect.height)
    }

    fn click(&mut self, mouse: Vector2) {
        let nav_top = self.nav_offset * NAVBAR_HEIGHT;

        if self.layout.mobile && self.menu.is_open() {
            if let Some(index) = (0..NAV_LINKS.len()).find(|&i| contains(self.layout.menu_link(i), mouse)) {
                self.menu.link_clicked();
                self.follow_link(NAV_LINKS[index].1);
                return;
            }
        }

        if mouse.y >= nav_top && mouse.y < nav_top + NAVBAR_HEIGHT {
            let local = Vector2::new(mouse.x, mouse.y - nav_top);
            if self.layout.mobile {
                if contains(self.layout.toggle_button(), local) {
                    self.menu.toggle_clicked();
                }
            } else if let Some(index) = (0..NAV_LINKS.len()).find(|&i| contains(self.layout.nav_link(i), local)) {
                self.follow_link(NAV_LINKS[index].1);
            } else if local.x < 200.0 {
                self.follow_link("#home");
            }
            return;
        }

        let point = self.to_page(mouse);

        if let Some(carousel) = self.carousel.as_mut() {
            if contains(self.layout.prev_button(), point) {
                carousel.previous_clicked(&mut self.deck);
                return;
            }
            if contains(self.layout.next_button(), point) {
                carousel.next_clicked(&mut self.deck);
                return;
            }
            let count = carousel.len();
            if let Some(index) = (0..count).find(|&i| self.layout.dot(i, count).distance_to(point) <= 10.0) {
                carousel.indicator_clicked(index, &mut self.deck);
                return;
            }
        }

        if contains(self.layout.submit_button(), point) {
            if self.form.submit() {
                self.focused = None;
            }
            return;
        }
        self.focused = Field::ALL.into_iter().find(|&f| contains(self.layout.field(f), point));
    }

    pub fn update(&mut self, rl: &mut RaylibHandle, dt: f32) {
        let size = (rl.get_screen_width(), rl.get_screen_height());
        if size != self.screen {
            self.relayout(size.0, size.1);
        }

        if self.cursor.visible && rl.get_touch_point_count() > 0 {
            info!("Touch input seen, hiding cursor glow");
            self.cursor.touch_detected();
        }

        let mouse = rl.get_mouse_position();
        self.cursor.pointer_moved(mouse);
        self.cursor.step();

        // Scrolling
        let previous_scroll = self.scroll_y;
        let wheel = rl.get_mouse_wheel_move();
        if wheel != 0.0 {
            self.smooth_scroll.cancel();
            self.scroll_y -= wheel * WHEEL_SCROLL_STEP;
        }
        if let Some(offset) = self.smooth_scroll.update(dt) {
            self.scroll_y = offset;
        }
        self.scroll_y = self.scroll_y.clamp(0.0, self.layout.max_scroll());
        if self.scroll_y != previous_scroll {
            self.navbar.scrolled(self.scroll_y);
        }

        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            self.click(mouse);
        }

        // Arrow keys drive the carousel wherever focus is
        if let Some(carousel) = self.carousel.as_mut() {
            for key in [KeyboardKey::KEY_LEFT, KeyboardKey::KEY_RIGHT] {
                if rl.is_key_pressed(key) {
                    carousel.key_pressed(key, &mut self.deck);
                }
            }
        }

        if let Some(field) = self.focused {
            while let Some(c) = rl.get_char_pressed() {
                self.form.type_char(field, c);
            }
            if rl.is_key_pressed(KeyboardKey::KEY_BACKSPACE) {
                self.form.backspace(field);
            }
            if rl.is_key_pressed(KeyboardKey::KEY_TAB) {
                let next = Field::ALL.iter().position(|&f| f == field).map_or(0, |i| (i + 1) % Field::ALL.len());
                self.focused = Some(Field::ALL[next]);
            }
        }

        // Pointer enter/leave on the carousel
        let hovered = contains(self.to_screen(self.layout.carousel_region()), mouse);
        if let Some(carousel) = self.carousel.as_mut() {
            if hovered && !self.carousel_hovered {
                carousel.pointer_entered();
            } else if !hovered && self.carousel_hovered {
                carousel.pointer_left();
            }
            carousel.update(dt, &mut self.deck);
        }
        self.carousel_hovered = hovered;
        self.deck.update(dt);

        self.reveal.update(dt, self.scroll_y, self.layout.viewport);
        self.form.update(dt);

        let nav_target = self.navbar.style().translate_y();
        self.nav_offset = raylib::core::math::lerp(self.nav_offset, nav_target, (dt * 12.0).min(1.0));
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        d.clear_background(BACKGROUND);

        self.draw_hero(d);
        for (handle, (_, title)) in SECTION_TITLES.iter().enumerate() {
            let header = self.layout.headers[handle];
            self.with_reveal(d, handle, header, |d, rect, alpha| {
                d.draw_text(title, rect.x as i32, rect.y as i32, 40, TEXT.fade(alpha));
                d.draw_rectangle_rec(Rectangle::new(rect.x, rect.y + 50.0, 60.0, 4.0), ACCENT.fade(alpha));
            });
        }

        self.with_reveal(d, ABOUT_BLOCK, self.layout.about, |d, rect, alpha| {
            for (line, text) in ABOUT.iter().enumerate() {
                d.draw_text(text, rect.x as i32, (rect.y + line as f32 * 34.0) as i32, 24, MUTED.fade(alpha));
            }
        });
        for (i, (title, body)) in SKILLS.iter().enumerate() {
            self.draw_card(d, SKILL_BLOCKS + i, self.layout.skills[i], title, body);
        }
        for (i, (title, body)) in PROJECTS.iter().enumerate() {
            self.draw_card(d, PROJECT_BLOCKS + i, self.layout.projects[i], title, body);
        }

        self.draw_carousel(d);
        self.draw_contact(d);

        self.cursor.draw(d);
        self.draw_navbar(d);
    }

    /// Draws a revealable block at its screen position, risen and faded by its reveal progress.
    fn with_reveal<F>(&self, d: &mut RaylibDrawHandle, handle: usize, rect: Rectangle, draw: F)
    where
        F: FnOnce(&mut RaylibDrawHandle, Rectangle, f32),
    {
        let alpha = self.reveal.opacity(handle);
        if alpha <= 0.0 {
            return;
        }
        let mut rect = self.to_screen(rect);
        if rect.y > self.layout.viewport || rect.y + rect.height < 0.0 {
            return;
        }
        rect.y += self.reveal.rise(handle);
        draw(d, rect, alpha);
    }

    fn draw_hero(&self, d: &mut RaylibDrawHandle) {
        let hero = self.to_screen(self.layout.hero);
        let x = (hero.width * 0.1) as i32;
        let y = (hero.y + hero.height * 0.35) as i32;
        d.draw_text("Hello, I build things", x, y, 64, TEXT);
        d.draw_text("Backend engineer and tinkerer", x, y + 84, 28, MUTED);
        d.draw_text("Scroll down", x, (hero.y + hero.height - 80.0) as i32, 20, ACCENT);
    }

    fn draw_card(&self, d: &mut RaylibDrawHandle, handle: usize, rect: Rectangle, title: &str, body: &str) {
        self.with_reveal(d, handle, rect, |d, rect, alpha| {
            d.draw_rectangle_rounded(rect, 0.08, 8, CARD.fade(alpha));
            d.draw_text(title, (rect.x + 24.0) as i32, (rect.y + 28.0) as i32, 28, TEXT.fade(alpha));
            d.draw_text(body, (rect.x + 24.0) as i32, (rect.y + 76.0) as i32, 18, MUTED.fade(alpha));
        });
    }

    fn draw_carousel(&self, d: &mut RaylibDrawHandle) {
        let Some(carousel) = self.carousel.as_ref() else {
            return;
        };
        let area = self.to_screen(self.layout.carousel);
        if area.y > self.layout.viewport || area.y + area.height + 60.0 < 0.0 {
            return;
        }

        d.draw_rectangle_rounded(area, 0.04, 8, CARD);
        self.deck.draw(d, area);

        for button in [self.layout.prev_button(), self.layout.next_button()] {
            let rect = self.to_screen(button);
            let center = Vector2::new(rect.x + rect.width * 0.5, rect.y + rect.height * 0.5);
            d.draw_circle_v(center, 22.0, BACKGROUND.fade(0.7));
        }
        let prev = self.to_screen(self.layout.prev_button());
        let next = self.to_screen(self.layout.next_button());
        d.draw_text("<", (prev.x + 15.0) as i32, (prev.y + 10.0) as i32, 24, TEXT);
        d.draw_text(">", (next.x + 17.0) as i32, (next.y + 10.0) as i32, 24, TEXT);

        let mouse = d.get_mouse_position();
        let count = carousel.len();
        for (index, indicator) in self.deck.indicators.iter().enumerate() {
            let dot = self.layout.dot(index, count);
            let center = Vector2::new(dot.x, dot.y - self.scroll_y);
            if indicator.active {
                d.draw_circle_v(center, 6.0, ACCENT);
            } else {
                d.draw_circle_v(center, 6.0, MUTED.fade(0.5));
            }
            if center.distance_to(mouse) <= 10.0 {
                d.draw_text(&indicator.label, (center.x - 40.0) as i32, (center.y + 14.0) as i32, 14, MUTED);
            }
        }
    }

    fn draw_contact(&self, d: &mut RaylibDrawHandle) {
        self.with_reveal(d, CONTACT_BLOCK, self.layout.contact, |d, rect, alpha| {
            let rise = rect.y - self.to_screen(self.layout.contact).y;
            d.draw_rectangle_rounded(rect, 0.05, 8, CARD.fade(alpha));
            d.draw_text("Drop me a line", (rect.x + 30.0) as i32, (rect.y + 24.0) as i32, 24, TEXT.fade(alpha));

            for field in Field::ALL {
                let mut input = self.to_screen(self.layout.field(field));
                input.y += rise;
                let border = if self.focused == Some(field) { ACCENT } else { MUTED.fade(0.4) };
                d.draw_rectangle_rec(input, BACKGROUND.fade(alpha));
                d.draw_rectangle_lines_ex(input, 1.5, border.fade(alpha));

                let value = self.form.field(field);
                let (text, color) = if value.is_empty() { (field.label(), MUTED) } else { (value, TEXT) };
                d.draw_text(text, (input.x + 12.0) as i32, (input.y + 12.0) as i32, 20, color.fade(alpha));
            }

            let mut button = self.to_screen(self.layout.submit_button());
            button.y += rise;
            let fill = if self.form.is_editable() { ACCENT } else { ACCENT.fade(0.6) };
            d.draw_rectangle_rounded(button, 0.3, 8, fill.fade(alpha));

            let mut label_x = button.x + 24.0;
            if let Some(angle) = self.form.spinner_angle() {
                let center = Vector2::new(button.x + 30.0, button.y + button.height * 0.5);
                d.draw_ring(center, 7.0, 10.0, angle, angle + 270.0, 16, TEXT);
                label_x += 22.0;
            }
            d.draw_text(self.form.button_label(), label_x as i32, (button.y + 14.0) as i32, 20, TEXT.fade(alpha));
        });
    }

    fn draw_navbar(&self, d: &mut RaylibDrawHandle) {
        let style = self.navbar.style();
        let top = self.nav_offset * NAVBAR_HEIGHT;
        let bar = Rectangle::new(0.0, top, self.layout.width, NAVBAR_HEIGHT);

        if style.has_shadow() {
            d.draw_rectangle_gradient_v(0, (top + NAVBAR_HEIGHT) as i32, self.layout.width as i32, 30, Color::new(0, 0, 0, 77), Color::new(0, 0, 0, 0));
        }
        d.draw_rectangle_rec(bar, style.background());
        d.draw_text("portfolio", 40, (top + 22.0) as i32, 26, TEXT);

        if self.layout.mobile {
            let mut toggle = self.layout.toggle_button();
            toggle.y += top;
            self.menu.draw_toggle(d, toggle, TEXT);

            if self.menu.is_open() {
                for (index, (label, _)) in NAV_LINKS.iter().enumerate() {
                    let row = self.layout.menu_link(index);
                    d.draw_rectangle_rec(row, Color::new(10, 10, 15, 245));
                    d.draw_text(label, 40, (row.y + 15.0) as i32, 22, TEXT);
                }
            }
        } else {
            for (index, (label, _)) in NAV_LINKS.iter().enumerate() {
                let slot = self.layout.nav_link(index);
                d.draw_text(label, slot.x as i32, (top + 25.0) as i32, 20, MUTED);
            }
        }
    }
}
