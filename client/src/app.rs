use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    CanvasRenderingContext2d, Element, Event, HtmlButtonElement, HtmlCanvasElement,
    HtmlSpanElement, KeyboardEvent, PointerEvent,
};

use sketchboard_shared::{Mode, Point, Session};

use crate::dom::{
    event_to_point, get_element, resize_canvas, set_canvas_cursor, set_mode_button,
    update_zoom_label,
};
use crate::panel::PanelLog;
use crate::render::redraw;

struct App {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    session: Session<PanelLog>,
    width: f64,
    height: f64,
}

#[derive(Clone)]
struct Ui {
    draw_button: HtmlButtonElement,
    select_button: HtmlButtonElement,
    zoom_value: HtmlSpanElement,
}

fn sync_ui(app: &mut App, ui: &Ui) {
    set_mode_button(&ui.draw_button, app.session.mode() == Mode::Draw);
    set_mode_button(&ui.select_button, app.session.mode() == Mode::Select);
    update_zoom_label(&ui.zoom_value, app.session.zoom_percent());
    set_canvas_cursor(&app.canvas, app.session.cursor_hint());
    if app.session.take_render_request() {
        redraw(&app.ctx, app.session.surface(), app.width, app.height);
    }
}

fn document_ready(document: &web_sys::Document) -> bool {
    document.ready_state() == "complete"
}

#[wasm_bindgen(start)]
pub fn run() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("Missing window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("Missing document"))?;
    let started = Rc::new(Cell::new(false));

    if document_ready(&document) {
        started.set(true);
        return start_app();
    }

    let onload_started = started.clone();
    let onload = Closure::<dyn FnMut(Event)>::new(move |_| {
        if onload_started.replace(true) {
            return;
        }
        if let Err(err) = start_app() {
            web_sys::console::error_1(&err);
        }
    });
    window.add_event_listener_with_callback("load", onload.as_ref().unchecked_ref())?;
    onload.forget();

    Ok(())
}

fn start_app() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("Missing window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("Missing document"))?;

    let canvas: HtmlCanvasElement = get_element(&document, "board")?;
    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("Missing canvas context"))?
        .dyn_into::<CanvasRenderingContext2d>()?;
    ctx.set_line_cap("round");
    ctx.set_line_join("round");

    let draw_button: HtmlButtonElement = get_element(&document, "drawMode")?;
    let select_button: HtmlButtonElement = get_element(&document, "selectMode")?;
    let clear_button: HtmlButtonElement = get_element(&document, "clear")?;
    let zoom_in_button: HtmlButtonElement = get_element(&document, "zoomIn")?;
    let zoom_out_button: HtmlButtonElement = get_element(&document, "zoomOut")?;
    let zoom_reset_button: HtmlButtonElement = get_element(&document, "zoomReset")?;
    let zoom_value: HtmlSpanElement = get_element(&document, "zoomValue")?;
    let log_panel: Element = document
        .get_element_by_id("log-messages")
        .ok_or_else(|| JsValue::from_str("Missing log panel"))?;

    let session = Session::new(PanelLog::new(document.clone(), log_panel));
    let app = Rc::new(RefCell::new(App {
        canvas: canvas.clone(),
        ctx,
        session,
        width: 0.0,
        height: 0.0,
    }));
    let ui = Ui {
        draw_button: draw_button.clone(),
        select_button: select_button.clone(),
        zoom_value,
    };

    {
        let mut app = app.borrow_mut();
        let (width, height) = resize_canvas(&window, &app.canvas, &app.ctx);
        app.width = width;
        app.height = height;
        redraw(&app.ctx, app.session.surface(), width, height);
        sync_ui(&mut app, &ui);
    }

    {
        let app = app.clone();
        let ui = ui.clone();
        let resize_window = window.clone();
        let onresize = Closure::<dyn FnMut(Event)>::new(move |_| {
            let mut app = app.borrow_mut();
            let (width, height) = resize_canvas(&resize_window, &app.canvas, &app.ctx);
            app.width = width;
            app.height = height;
            redraw(&app.ctx, app.session.surface(), width, height);
            sync_ui(&mut app, &ui);
        });
        window.add_event_listener_with_callback("resize", onresize.as_ref().unchecked_ref())?;
        onresize.forget();
    }

    let mode_buttons = [
        (draw_button.clone(), Mode::Draw),
        (select_button.clone(), Mode::Select),
    ];
    for (button, mode) in mode_buttons {
        let app = app.clone();
        let ui = ui.clone();
        let onclick = Closure::<dyn FnMut(Event)>::new(move |_| {
            let mut app = app.borrow_mut();
            app.session.set_mode(mode);
            sync_ui(&mut app, &ui);
        });
        button.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }

    {
        let app = app.clone();
        let ui = ui.clone();
        let onclick = Closure::<dyn FnMut(Event)>::new(move |_| {
            let mut app = app.borrow_mut();
            app.session.clear();
            sync_ui(&mut app, &ui);
        });
        clear_button.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }

    let zoom_buttons: [(HtmlButtonElement, fn(&mut Session<PanelLog>)); 3] = [
        (zoom_in_button, |session| session.zoom_in()),
        (zoom_out_button, |session| session.zoom_out()),
        (zoom_reset_button, |session| session.reset_zoom()),
    ];
    for (button, action) in zoom_buttons {
        let app = app.clone();
        let ui = ui.clone();
        let onclick = Closure::<dyn FnMut(Event)>::new(move |_| {
            let mut app = app.borrow_mut();
            action(&mut app.session);
            sync_ui(&mut app, &ui);
        });
        button.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }

    {
        let app = app.clone();
        let ui = ui.clone();
        let ondown = Closure::<dyn FnMut(PointerEvent)>::new(move |event: PointerEvent| {
            let mut app = app.borrow_mut();
            if let Some(point) = event_to_point(&app.canvas, &event) {
                app.session.pointer_down(point);
            }
            sync_ui(&mut app, &ui);
        });
        canvas.add_event_listener_with_callback("pointerdown", ondown.as_ref().unchecked_ref())?;
        ondown.forget();
    }

    {
        let app = app.clone();
        let ui = ui.clone();
        let onmove = Closure::<dyn FnMut(PointerEvent)>::new(move |event: PointerEvent| {
            let mut app = app.borrow_mut();
            if let Some(point) = event_to_point(&app.canvas, &event) {
                app.session.pointer_move(point);
            }
            sync_ui(&mut app, &ui);
        });
        canvas.add_event_listener_with_callback("pointermove", onmove.as_ref().unchecked_ref())?;
        onmove.forget();
    }

    {
        let app = app.clone();
        let ui = ui.clone();
        let onstop = Closure::<dyn FnMut(PointerEvent)>::new(move |_| {
            let mut app = app.borrow_mut();
            app.session.pointer_up();
            sync_ui(&mut app, &ui);
        });
        canvas.add_event_listener_with_callback("pointerup", onstop.as_ref().unchecked_ref())?;
        canvas.add_event_listener_with_callback("pointerleave", onstop.as_ref().unchecked_ref())?;
        onstop.forget();
    }

    {
        let app = app.clone();
        let ui = ui.clone();
        let wheel_canvas = canvas.clone();
        let onwheel = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let wheel_event = match event.dyn_into::<web_sys::WheelEvent>() {
                Ok(event) => event,
                Err(_) => return,
            };
            wheel_event.prevent_default();
            let rect = wheel_canvas.get_bounding_client_rect();
            let cursor = Point::new(
                wheel_event.client_x() as f64 - rect.left(),
                wheel_event.client_y() as f64 - rect.top(),
            );
            let mut app = app.borrow_mut();
            app.session.wheel_zoom(wheel_event.delta_y(), cursor);
            sync_ui(&mut app, &ui);
        });
        canvas.add_event_listener_with_callback("wheel", onwheel.as_ref().unchecked_ref())?;
        onwheel.forget();
    }

    {
        let app = app.clone();
        let ui = ui.clone();
        let onkeydown = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            if event.code() != "Space" || event.repeat() {
                return;
            }
            event.prevent_default();
            let mut app = app.borrow_mut();
            app.session.modifier_down();
            sync_ui(&mut app, &ui);
        });
        window.add_event_listener_with_callback("keydown", onkeydown.as_ref().unchecked_ref())?;
        onkeydown.forget();
    }

    {
        let app = app.clone();
        let ui = ui.clone();
        let onkeyup = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            if event.code() != "Space" {
                return;
            }
            let mut app = app.borrow_mut();
            app.session.modifier_up();
            sync_ui(&mut app, &ui);
        });
        window.add_event_listener_with_callback("keyup", onkeyup.as_ref().unchecked_ref())?;
        onkeyup.forget();
    }

    Ok(())
}
