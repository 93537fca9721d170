// Overlay canvas and DOM wiring constants.
// Kept free of web-sys types so host tests can include this file.

// Id given to the overlay canvas so the page (and teardown) can find it
pub const OVERLAY_CANVAS_ID: &str = "magic-cursor-canvas";

// Full-viewport, transparent, stacked above the page, never intercepts input
pub const OVERLAY_STYLE: &str = "position: fixed; top: 0; left: 0; width: 100vw; height: 100vh; \
pointer-events: none; z-index: 9999; cursor: none; background-color: transparent;";

// Window events the animator listens to
pub const EVENT_RESIZE: &str = "resize";
pub const EVENT_POINTER_MOVE: &str = "mousemove";
pub const EVENT_CLICK: &str = "click";
