//! TagsWidget - the floating tags mounted into a page element
//!
//! Each pill is an absolutely positioned `<div>` inside the container. The
//! loop runs on `requestAnimationFrame`; pointer move/up listeners go on the
//! document only while a pill is held, so releasing outside the container
//! still ends the drag. Dropping the widget (JS `free()`) cancels the pending
//! frame and removes every listener and element it added.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, PointerEvent, Window};

use crate::core::error::{describe_js, EngineError, Result};
use crate::domain::config::PhysicsConfig;
use crate::domain::tags::{default_tags, tags_from_json};
use crate::simulation::{
    BodySnapshot, FrameHandle, FrameScheduler, PointerCapture, Simulator, TagWorldCore, XorShift32,
};

type BrowserSimulator = Simulator<RafScheduler, DocumentPointerCapture>;
type SharedSimulator = Rc<RefCell<BrowserSimulator>>;

fn dom_err(e: JsValue) -> EngineError {
    EngineError::Dom(describe_js(&e))
}

/// Pointer position relative to the container's top-left corner
fn local_point(container: &HtmlElement, e: &PointerEvent) -> (f32, f32) {
    let rect = container.get_bounding_client_rect();
    (
        (e.client_x() as f64 - rect.left()) as f32,
        (e.client_y() as f64 - rect.top()) as f32,
    )
}

fn measure(container: &HtmlElement) -> (f32, f32) {
    (container.client_width() as f32, container.client_height() as f32)
}

// === Scheduler ===

pub struct RafScheduler {
    window: Window,
    callback: Closure<dyn FnMut()>,
}

impl RafScheduler {
    fn new(window: Window, sim: Weak<RefCell<BrowserSimulator>>, renderer: Rc<RefCell<DomRenderer>>) -> Self {
        let callback = Closure::wrap(Box::new(move || {
            let Some(sim) = sim.upgrade() else {
                return;
            };
            let mut sim = sim.borrow_mut();
            match sim.on_frame() {
                Ok(true) => renderer.borrow().render(sim.world().snapshot()),
                Ok(false) => {}
                Err(err) => engine_warn!("floating tags: frame loop halted: {}", err),
            }
        }) as Box<dyn FnMut()>);
        Self { window, callback }
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) -> Result<FrameHandle> {
        self.window
            .request_animation_frame(self.callback.as_ref().unchecked_ref())
            .map(FrameHandle)
            .map_err(|e| EngineError::Scheduler(describe_js(&e)))
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        let _ = self.window.cancel_animation_frame(handle.0);
    }
}

// === Global pointer listeners ===

pub struct DocumentPointerCapture {
    document: Document,
    on_move: Closure<dyn FnMut(PointerEvent)>,
    on_up: Closure<dyn FnMut(PointerEvent)>,
    attached: bool,
}

impl DocumentPointerCapture {
    fn new(document: Document, container: HtmlElement, sim: Weak<RefCell<BrowserSimulator>>) -> Self {
        let (move_container, move_sim) = (container.clone(), sim.clone());
        let on_move = Closure::wrap(Box::new(move |e: PointerEvent| {
            let Some(sim) = move_sim.upgrade() else {
                return;
            };
            let (x, y) = local_point(&move_container, &e);
            if sim.borrow_mut().pointer_move(x, y) {
                e.prevent_default();
            }
        }) as Box<dyn FnMut(PointerEvent)>);

        let on_up = Closure::wrap(Box::new(move |e: PointerEvent| {
            let Some(sim) = sim.upgrade() else {
                return;
            };
            let (x, y) = local_point(&container, &e);
            sim.borrow_mut().pointer_up(x, y);
        }) as Box<dyn FnMut(PointerEvent)>);

        Self { document, on_move, on_up, attached: false }
    }

    fn listeners(&self) -> [(&'static str, &js_sys::Function); 3] {
        [
            ("pointermove", self.on_move.as_ref().unchecked_ref()),
            ("pointerup", self.on_up.as_ref().unchecked_ref()),
            ("pointercancel", self.on_up.as_ref().unchecked_ref()),
        ]
    }
}

impl PointerCapture for DocumentPointerCapture {
    fn attach(&mut self) -> Result<()> {
        if self.attached {
            return Ok(());
        }
        for (event, callback) in self.listeners() {
            if let Err(e) = self.document.add_event_listener_with_callback(event, callback) {
                // Undo the ones that made it
                for (event, callback) in self.listeners() {
                    let _ = self.document.remove_event_listener_with_callback(event, callback);
                }
                return Err(dom_err(e));
            }
        }
        self.attached = true;
        Ok(())
    }

    fn detach(&mut self) {
        if !self.attached {
            return;
        }
        for (event, callback) in self.listeners() {
            let _ = self.document.remove_event_listener_with_callback(event, callback);
        }
        self.attached = false;
    }
}

// === Renderer ===

const PILL_STYLE: [(&str, &str); 12] = [
    ("position", "absolute"),
    ("box-sizing", "border-box"),
    ("display", "flex"),
    ("align-items", "center"),
    ("justify-content", "center"),
    ("border-radius", "50px"),
    ("font-weight", "600"),
    ("font-family", "sans-serif"),
    ("white-space", "nowrap"),
    ("user-select", "none"),
    ("touch-action", "none"),
    ("will-change", "transform"),
];

/// Draws the published snapshot; never touches simulation state.
pub struct DomRenderer {
    container: HtmlElement,
    elements: Vec<HtmlElement>,
    grabs: Vec<Closure<dyn FnMut(PointerEvent)>>,
}

impl DomRenderer {
    fn new(container: HtmlElement) -> Self {
        Self { container, elements: Vec::new(), grabs: Vec::new() }
    }

    fn len(&self) -> usize {
        self.elements.len()
    }

    /// (Re)create one element per pill and wire its pointerdown.
    fn build(
        &mut self,
        document: &Document,
        snapshot: &[BodySnapshot],
        sim: &Weak<RefCell<BrowserSimulator>>,
    ) -> Result<()> {
        self.clear();

        for snap in snapshot {
            let el = document
                .create_element("div")
                .map_err(dom_err)?
                .dyn_into::<HtmlElement>()
                .map_err(|_| EngineError::Dom("created div is not an HtmlElement".to_string()))?;
            el.set_class_name("floating-tag");
            el.set_text_content(Some(&snap.label));

            let style = el.style();
            for (name, value) in PILL_STYLE {
                style.set_property(name, value).map_err(dom_err)?;
            }
            style.set_property("width", &format!("{}px", snap.width)).map_err(dom_err)?;
            style.set_property("height", &format!("{}px", snap.height)).map_err(dom_err)?;
            style.set_property("background-color", &snap.color).map_err(dom_err)?;
            style.set_property("color", &snap.text_color).map_err(dom_err)?;

            let index = snap.index;
            let weak = sim.clone();
            let container = self.container.clone();
            let grab = Closure::wrap(Box::new(move |e: PointerEvent| {
                let Some(sim) = weak.upgrade() else {
                    return;
                };
                let (x, y) = local_point(&container, &e);
                let grabbed = sim.borrow_mut().pointer_down(index, x, y);
                match grabbed {
                    Ok(true) => e.prevent_default(),
                    Ok(false) => {}
                    Err(err) => engine_warn!("floating tags: could not start drag: {}", err),
                }
            }) as Box<dyn FnMut(PointerEvent)>);
            el.add_event_listener_with_callback("pointerdown", grab.as_ref().unchecked_ref())
                .map_err(dom_err)?;

            self.container.append_child(&el).map_err(dom_err)?;
            self.elements.push(el);
            self.grabs.push(grab);
        }

        self.render(snapshot);
        Ok(())
    }

    fn render(&self, snapshot: &[BodySnapshot]) {
        for (el, snap) in self.elements.iter().zip(snapshot) {
            let style = el.style();
            let _ = style.set_property("left", &format!("{}px", snap.left()));
            let _ = style.set_property("top", &format!("{}px", snap.top()));
            let _ = style.set_property("transform", &format!("rotate({}rad)", snap.rotation));
            let _ = style.set_property("cursor", if snap.held { "grabbing" } else { "grab" });
        }
    }

    fn clear(&mut self) {
        for el in self.elements.drain(..) {
            el.remove();
        }
        self.grabs.clear();
    }
}

impl Drop for DomRenderer {
    fn drop(&mut self) {
        self.clear();
    }
}

// === Widget ===

/// Re-measure the container and rebuild elements if the body set changed.
fn apply_resize(
    sim: &SharedSimulator,
    renderer: &Rc<RefCell<DomRenderer>>,
    document: &Document,
    container: &HtmlElement,
) -> Result<bool> {
    let (width, height) = measure(container);
    let applied = sim.borrow_mut().resize(width, height)?;
    let sim_ref = sim.borrow();
    let snapshot = sim_ref.world().snapshot();
    let mut renderer = renderer.borrow_mut();
    if renderer.len() != snapshot.len() {
        renderer.build(document, snapshot, &Rc::downgrade(sim))?;
    } else {
        renderer.render(snapshot);
    }
    Ok(applied)
}

#[wasm_bindgen]
pub struct TagsWidget {
    sim: SharedSimulator,
    renderer: Rc<RefCell<DomRenderer>>,
    window: Window,
    document: Document,
    container: HtmlElement,
    on_resize: Closure<dyn FnMut()>,
}

#[wasm_bindgen]
impl TagsWidget {
    /// Mount the tags into `container` (which should be `position: relative`
    /// with `overflow: hidden`). Call `start()` to begin animating.
    #[wasm_bindgen(constructor)]
    pub fn new(
        container: HtmlElement,
        tags_json: Option<String>,
        config_json: Option<String>,
        seed: u32,
    ) -> std::result::Result<TagsWidget, JsValue> {
        let window = web_sys::window().ok_or_else(|| EngineError::Dom("no window".to_string()))?;
        let document = window
            .document()
            .ok_or_else(|| EngineError::Dom("no document".to_string()))?;

        let tags = match tags_json {
            Some(json) => tags_from_json(&json)?,
            None => default_tags(),
        };
        let config = match config_json {
            Some(json) => PhysicsConfig::from_json(&json)?,
            None => PhysicsConfig::default(),
        };

        let (width, height) = measure(&container);
        let world = TagWorldCore::new(width, height, tags, config, Box::new(XorShift32::new(seed)))?;

        let renderer = Rc::new(RefCell::new(DomRenderer::new(container.clone())));
        let sim: SharedSimulator = Rc::new_cyclic(|weak: &Weak<RefCell<BrowserSimulator>>| {
            let scheduler = RafScheduler::new(window.clone(), weak.clone(), renderer.clone());
            let capture = DocumentPointerCapture::new(document.clone(), container.clone(), weak.clone());
            RefCell::new(Simulator::new(world, scheduler, capture))
        });

        renderer
            .borrow_mut()
            .build(&document, sim.borrow().world().snapshot(), &Rc::downgrade(&sim))?;

        let on_resize = {
            let weak = Rc::downgrade(&sim);
            let renderer = renderer.clone();
            let document = document.clone();
            let container = container.clone();
            Closure::wrap(Box::new(move || {
                let Some(sim) = weak.upgrade() else {
                    return;
                };
                if let Err(err) = apply_resize(&sim, &renderer, &document, &container) {
                    engine_warn!("floating tags: resize failed: {}", err);
                }
            }) as Box<dyn FnMut()>)
        };
        window
            .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
            .map_err(dom_err)?;

        engine_log!("floating tags: mounted {}x{}", width, height);
        Ok(Self { sim, renderer, window, document, container, on_resize })
    }

    pub fn start(&self) -> std::result::Result<(), JsValue> {
        self.sim.borrow_mut().start()?;
        Ok(())
    }

    pub fn stop(&self) {
        self.sim.borrow_mut().stop();
    }

    /// Re-measure the container (for hosts using a ResizeObserver)
    pub fn resize(&self) -> std::result::Result<bool, JsValue> {
        Ok(apply_resize(&self.sim, &self.renderer, &self.document, &self.container)?)
    }

    /// Throw every pill back to its starting spot
    pub fn reset(&self) -> std::result::Result<bool, JsValue> {
        let applied = self.sim.borrow_mut().reset();
        self.rebuild()?;
        Ok(applied)
    }

    /// New labels (e.g. after a language switch)
    pub fn set_tags(&self, tags_json: String) -> std::result::Result<(), JsValue> {
        let tags = tags_from_json(&tags_json)?;
        self.sim.borrow_mut().set_tags(tags)?;
        self.rebuild()?;
        Ok(())
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.sim.borrow().pending_frame().is_some()
    }

    pub fn snapshot_json(&self) -> std::result::Result<String, JsValue> {
        self.sim
            .borrow()
            .world()
            .snapshot_json()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl TagsWidget {
    fn rebuild(&self) -> Result<()> {
        let sim = self.sim.borrow();
        self.renderer
            .borrow_mut()
            .build(&self.document, sim.world().snapshot(), &Rc::downgrade(&self.sim))
    }
}

impl Drop for TagsWidget {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref());
        self.sim.borrow_mut().stop();
        self.renderer.borrow_mut().clear();
        engine_log!("floating tags: unmounted");
    }
}
