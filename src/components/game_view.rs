use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{HtmlCanvasElement, KeyboardEvent, Window};
use yew::prelude::*;

use crate::error::GearError;
use crate::model::Slot;
use crate::render::CanvasSurface;
use crate::state::Simulation;
use crate::util::roll_rarity;

use super::{controls_panel::ControlsPanel, gear_panel::GearPanel, legend_panel::LegendPanel};

type FrameCell = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Animation-frame loop plus key listeners; torn down on drop.
struct FrameLoop {
    window: Window,
    frame_cb: FrameCell,
    raf_id: Rc<RefCell<Option<i32>>>,
    keydown_cb: Closure<dyn FnMut(KeyboardEvent)>,
    keyup_cb: Closure<dyn FnMut(KeyboardEvent)>,
}

impl FrameLoop {
    fn start(canvas: &HtmlCanvasElement, sim: Rc<RefCell<Simulation>>) -> Result<Self, GearError> {
        let window = web_sys::window().ok_or_else(|| GearError::Dom("no global `window`".into()))?;
        let mut surface = CanvasSurface::attach(canvas, &sim.borrow().config)?;

        let raf_id = Rc::new(RefCell::new(None));
        let frame_cb: FrameCell = Rc::new(RefCell::new(None));
        {
            let sim = sim.clone();
            let raf_id = raf_id.clone();
            let window_loop = window.clone();
            let frame_cb_loop = frame_cb.clone();
            *frame_cb.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                sim.borrow_mut().frame(&mut surface);
                // schedule next frame
                if let Some(cb) = frame_cb_loop.borrow().as_ref() {
                    if let Ok(id) = window_loop.request_animation_frame(cb.as_ref().unchecked_ref()) {
                        *raf_id.borrow_mut() = Some(id);
                    }
                }
            }) as Box<dyn FnMut()>));
        }
        // kick off
        if let Some(cb) = frame_cb.borrow().as_ref() {
            let id = window
                .request_animation_frame(cb.as_ref().unchecked_ref())
                .map_err(|e| GearError::Dom(format!("requestAnimationFrame failed: {:?}", e)))?;
            *raf_id.borrow_mut() = Some(id);
        }

        let keydown_cb = {
            let sim = sim.clone();
            Closure::wrap(Box::new(move |e: KeyboardEvent| {
                sim.borrow_mut().key_down(&e.key());
            }) as Box<dyn FnMut(_)>)
        };
        let keyup_cb = {
            let sim = sim.clone();
            Closure::wrap(Box::new(move |e: KeyboardEvent| {
                sim.borrow_mut().key_up(&e.key());
            }) as Box<dyn FnMut(_)>)
        };
        let listen = |kind: &str, cb: &Closure<dyn FnMut(KeyboardEvent)>| {
            window
                .add_event_listener_with_callback(kind, cb.as_ref().unchecked_ref())
                .map_err(|e| GearError::Dom(format!("{} listener: {:?}", kind, e)))
        };
        listen("keydown", &keydown_cb)?;
        listen("keyup", &keyup_cb)?;

        Ok(Self { window, frame_cb, raf_id, keydown_cb, keyup_cb })
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("keydown", self.keydown_cb.as_ref().unchecked_ref());
        let _ = self
            .window
            .remove_event_listener_with_callback("keyup", self.keyup_cb.as_ref().unchecked_ref());
        if let Some(id) = self.raf_id.borrow_mut().take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        // The frame closure holds its own cell; break the cycle.
        self.frame_cb.borrow_mut().take();
    }
}

#[function_component(GameView)]
pub fn game_view() -> Html {
    let canvas_ref = use_node_ref();
    let sim = use_mut_ref(Simulation::default);
    let indicators = {
        let sim = sim.clone();
        use_state(move || sim.borrow().indicators())
    };

    {
        let canvas_ref = canvas_ref.clone();
        let sim = sim.clone();
        use_effect_with((), move |_| {
            let frame_loop = match canvas_ref.cast::<HtmlCanvasElement>() {
                Some(canvas) => FrameLoop::start(&canvas, sim)
                    .inspect_err(|e| log::error!("{}", e))
                    .ok(),
                None => {
                    log::error!("canvas ref not attached");
                    None
                }
            };
            move || drop(frame_loop)
        });
    }

    let on_slot = {
        let sim = sim.clone();
        let indicators = indicators.clone();
        Callback::from(move |slot: Slot| {
            let mut sim = sim.borrow_mut();
            sim.equip(slot, roll_rarity());
            indicators.set(sim.indicators());
        })
    };

    let (width, height) = {
        let cfg = sim.borrow().config;
        (cfg.canvas_width, cfg.canvas_height)
    };

    html! {
        <div style="position:relative; display:flex; gap:16px; align-items:flex-start; padding:16px;">
            <canvas ref={canvas_ref} id="game-canvas" width={width.to_string()} height={height.to_string()} style="display:block; border:1px solid #30363d; border-radius:8px;"></canvas>
            <div style="display:flex; flex-direction:column; gap:12px;">
                <GearPanel indicators={(*indicators).to_vec()} on_select={on_slot} />
                <LegendPanel />
                <ControlsPanel />
            </div>
        </div>
    }
}
