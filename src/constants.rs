pub const WINDOW_WIDTH: i32 = 1280;           // Initial window width
pub const WINDOW_HEIGHT: i32 = 800;           // Initial window height
pub const FPS: u32 = 60;                      // Target frames per second

pub const AUTOPLAY_INTERVAL: f32 = 4.0;       // Carousel auto-advance interval (seconds)
pub const MIN_AUTOPLAY_INTERVAL: f32 = 0.1;   // Shortest interval accepted on the command line (seconds)
pub const SLIDE_FADE_DURATION: f32 = 0.5;     // Cross-fade between carousel slides (seconds)

pub const CURSOR_EASING: f32 = 0.1;           // Fraction of the remaining distance covered per frame
pub const CURSOR_GLOW_RADIUS: f32 = 200.0;    // Radius of the cursor glow (pixels)

pub const MOBILE_BREAKPOINT: i32 = 768;       // Below this width the hamburger menu replaces nav links

pub const REVEAL_THRESHOLD: f32 = 0.1;        // Visible ratio needed to trigger a reveal
pub const REVEAL_BOTTOM_MARGIN: f32 = 50.0;   // Viewport bottom is shrunk by this much (pixels)
pub const REVEAL_STAGGER: f32 = 0.1;          // Delay between reveals of a single batch (seconds)
pub const REVEAL_DURATION: f32 = 0.6;         // Fade/slide-in duration of a reveal (seconds)
pub const REVEAL_RISE: f32 = 30.0;            // Vertical offset an element rises from (pixels)

pub const HEADER_OFFSET: f32 = 80.0;          // Space kept above an anchor target (pixels)
pub const SMOOTH_SCROLL_DURATION: f32 = 0.6;  // Anchor scroll animation (seconds)
pub const WHEEL_SCROLL_STEP: f32 = 60.0;      // Pixels per mouse wheel notch

pub const NAVBAR_HEIGHT: f32 = 70.0;          // Height of the navigation bar (pixels)
pub const NAVBAR_SOLID_AFTER: f32 = 100.0;    // Offset after which the navbar turns solid
pub const NAVBAR_HIDE_AFTER: f32 = 200.0;     // Offset after which scrolling down hides the navbar

pub const FORM_SEND_DELAY: f32 = 1.5;         // Simulated network round trip (seconds)
pub const FORM_SENT_DISPLAY: f32 = 3.0;       // How long "Message Sent!" stays up (seconds)
pub const SPINNER_PERIOD: f32 = 1.0;          // One full spinner turn (seconds)
