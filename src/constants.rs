// DOM ids, class names and rendering limits for the web front-end.
// Scene-level tuning (camera, timings, layout) lives in `deck_core::constants`.

// Element ids the page provides or the app creates
pub const CANVAS_ID: &str = "app-canvas";
pub const SLIDE_CONTAINER_ID: &str = "slideContainer";
pub const BACK_BUTTON_ID: &str = "backButton";
pub const LABEL_LAYER_ID: &str = "label-layer";
pub const INSTRUCTIONS_ID: &str = "instructions";
pub const CROSSHAIR_ID: &str = "crosshair";

// Panel ids are `slide-{index}`
pub const SLIDE_ID_PREFIX: &str = "slide-";

// Class names shared with the stylesheet
pub const SLIDE_CLASS: &str = "slide";
pub const IMAGE_CONTAINER_CLASS: &str = "image-container";
pub const IMAGE_WRAPPER_CLASS: &str = "image-wrapper";
pub const REAL_IMAGE_CLASS: &str = "real-image";
pub const PLACEHOLDER_CLASS: &str = "image-placeholder";
pub const IMAGE_DESCRIPTION_CLASS: &str = "image-description";
pub const BADGE_LABEL_CLASS: &str = "planet-label";
pub const PLATE_LABEL_CLASS: &str = "door-label";

// Display values used when a hidden element is shown
pub const CONTAINER_DISPLAY: &str = "flex";
pub const PANEL_DISPLAY: &str = "block";

// Ringed planet icon as a data URI; `#` must be written `%23`
pub const FAVICON_HREF: &str = "data:image/svg+xml,\
<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 32 32'>\
<circle cx='16' cy='16' r='9' fill='%234a90e2'/>\
<ellipse cx='16' cy='16' rx='15' ry='4' fill='none' stroke='%23ffd27f' stroke-width='2'/>\
</svg>";

pub const INSTRUCTIONS_HTML: &str =
    "<p>Click to start | WASD to move | Mouse to look | ESC to exit</p>";

// Mesh tessellation
pub const SPHERE_SEGMENTS: u32 = 32;
pub const RING_SEGMENTS: u32 = 64;

// Upper bound on instances per draw; scenes are far smaller
pub const MAX_MESH_INSTANCES: usize = 256;
