use crate::constants::*;
use crate::dom;
use crate::input::{self, MouseState};
use crate::labels::LabelLayer;
use crate::slides::DomPanels;
use deck_core::{
    pick_nearest, Camera, DeckConfig, HoverFrame, HoverResolver, InteractionMachine,
    InteractionMode, OrbitControls, Ray, SceneLayout, Settled, SlidePresenter, Variant,
    WalkControls, CAMERA_FOV_DEG, CAMERA_ZNEAR,
};
use glam::Vec2;
use instant::Instant;
use web_sys as web;

/// Everything one presentation needs at runtime. Owned by the frame loop and
/// shared with input handlers through `Rc<RefCell<App>>`.
pub struct App {
    pub variant: Variant,
    pub layout: SceneLayout,
    pub machine: InteractionMachine,
    pub presenter: SlidePresenter<DomPanels>,
    pub hover: HoverResolver,
    pub orbit: OrbitControls,
    pub walk: WalkControls,
    pub camera: Camera,
    /// Decorative spin per focusable body, parallel to `layout.objects`.
    pub rotations: Vec<Vec2>,
    pub mouse: MouseState,
    labels: LabelLayer,
    document: web::Document,
    instructions: Option<web::HtmlElement>,
    crosshair: Option<web::HtmlElement>,
}

impl App {
    pub fn new(
        document: &web::Document,
        variant: Variant,
        layout: SceneLayout,
    ) -> anyhow::Result<Self> {
        let table = variant.content();
        let panels = DomPanels::build(document, table, variant.back_label())?;
        let presenter = SlidePresenter::new(panels, table.len());
        let labels = LabelLayer::build(document, &layout.labels)?;
        let (instructions, crosshair) = match variant {
            Variant::Space => (None, None),
            Variant::Corridor => {
                let (i, c) = build_walk_overlay(document)?;
                (Some(i), Some(c))
            }
        };

        let config = DeckConfig::for_variant(variant);
        let machine = InteractionMachine::new(config, layout.start_pose);
        let camera = Camera::new(layout.start_pose, CAMERA_FOV_DEG, CAMERA_ZNEAR, layout.zfar);
        log::info!(
            "[app] {:?} deck: {} objects, {} slides",
            variant,
            layout.objects.len(),
            table.len()
        );
        Ok(Self {
            variant,
            hover: HoverResolver::new(layout.objects.len()),
            orbit: OrbitControls::default(),
            walk: WalkControls::new(&layout.start_pose),
            rotations: vec![Vec2::ZERO; layout.objects.len()],
            mouse: MouseState::default(),
            machine,
            presenter,
            camera,
            labels,
            layout,
            document: document.clone(),
            instructions,
            crosshair,
        })
    }

    /// Ray used for both hover and click resolution.
    fn pick_ray(&self) -> Ray {
        let ndc = input::pick_ndc(self.variant.pick_origin(), self.mouse.ndc);
        self.camera.ray_from_ndc(ndc)
    }

    pub fn click(&mut self, now: Instant) {
        // Doors: once a slide is up, any click walks back out.
        if self.variant == Variant::Corridor
            && matches!(self.machine.mode(), InteractionMode::Focused { .. })
        {
            self.request_return(now);
            return;
        }
        let hit = pick_nearest(&self.pick_ray(), &self.layout.objects);
        let object = hit.and_then(|h| self.layout.objects.get(h.index));
        if let Some(o) = object {
            log::info!("[click] hit {} ({})", o.index, o.name);
        }
        if self.machine.click(object, now) {
            // Leftover orbit motion would resume once the overview is back.
            self.orbit.reset();
        }
    }

    pub fn request_return(&mut self, now: Instant) {
        self.machine.request_return(now, &mut self.presenter);
    }

    pub fn set_pointer_locked(&mut self, locked: bool) {
        self.walk.set_locked(locked);
        if let Some(el) = &self.instructions {
            dom::set_displayed(el, !locked, PANEL_DISPLAY);
        }
        if let Some(el) = &self.crosshair {
            dom::set_displayed(el, locked, PANEL_DISPLAY);
        }
        log::debug!("[input] pointer lock {}", locked);
    }

    /// One tick: spin, controls, transition, hover, cursor, labels.
    /// Rendering is left to the caller.
    pub fn frame(&mut self, dt_sec: f32, now: Instant, viewport: Vec2) {
        let spin = self.machine.config().body_spin;
        for r in &mut self.rotations {
            *r += spin;
        }

        let look = self.mouse.take_look_delta();
        if let Some(pose) = self.machine.pose_mut_for_controls() {
            match self.variant {
                Variant::Space => {
                    self.orbit.update(pose);
                }
                Variant::Corridor => {
                    self.walk.look(look.x, look.y);
                    self.walk.update(pose, dt_sec);
                }
            }
        }

        match self.machine.tick(now, &mut self.presenter) {
            Some(Settled::Overview) => self.walk.sync_from(&self.machine.pose()),
            Some(Settled::Focused(_)) if self.variant == Variant::Corridor => {
                // Free the pointer so the back button can be reached.
                self.document.exit_pointer_lock();
            }
            _ => {}
        }

        self.camera.pose = self.machine.pose();
        self.camera.set_viewport(viewport.x, viewport.y);

        let ray = self.pick_ray();
        if let HoverFrame::Updated { .. } =
            self.hover
                .update(self.machine.mode(), &ray, &self.layout.objects)
        {
            dom::set_body_cursor(&self.document, self.hover.cursor().css());
        }

        self.labels.project(&self.camera, viewport.x, viewport.y);
    }
}

fn build_walk_overlay(
    document: &web::Document,
) -> anyhow::Result<(web::HtmlElement, web::HtmlElement)> {
    let body = dom::body(document)?;
    let instructions = dom::create(document, "div", Some(INSTRUCTIONS_ID), None)?;
    instructions.set_inner_html(INSTRUCTIONS_HTML);
    dom::append(&body, &instructions)?;

    let crosshair = dom::create(document, "div", Some(CROSSHAIR_ID), None)?;
    crosshair.set_text_content(Some("+"));
    dom::set_displayed(&crosshair, false, PANEL_DISPLAY);
    dom::append(&body, &crosshair)?;
    Ok((instructions, crosshair))
}
