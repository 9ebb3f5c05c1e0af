//! JS-facing handle around one debate session.
//!
//! The host calls `poll()` from its render loop (for example once per
//! animation frame) and re-renders from `view_json()` when it returns true.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use debate_core::controller::DebateController;
use debate_core::event_bus::EventBus;
use debate_core::ports::{TransportConnector, fetch_catalog_or_empty};
use debate_platform::{HttpPersonaCatalog, WebSocketConnector};
use debate_types::{DebateError, config::ClientConfig, persona::Persona};

#[wasm_bindgen]
pub struct DebateClient {
    controller: Rc<RefCell<DebateController>>,
}

#[wasm_bindgen]
impl DebateClient {
    /// Build a client from optional JSON config, open a fresh session and
    /// start loading the persona catalog in the background.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<DebateClient, JsValue> {
        let config = match config_json {
            Some(json) => ClientConfig::from_json(&json).map_err(to_js)?,
            None => ClientConfig::default(),
        };

        let connector: Rc<dyn TransportConnector> = Rc::new(WebSocketConnector::new());
        let mut controller = DebateController::new(config.clone(), connector, EventBus::new());
        // A failed open leaves the controller in Errored, which the view reports
        if let Err(e) = controller.new_session() {
            log::error!("Could not open debate session: {}", e);
        }

        let client = Self {
            controller: Rc::new(RefCell::new(controller)),
        };
        client.spawn_catalog_fetch(HttpPersonaCatalog::new(&config));
        Ok(client)
    }

    fn spawn_catalog_fetch(&self, catalog: HttpPersonaCatalog) {
        let controller = self.controller.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let personas = fetch_catalog_or_empty(&catalog).await;
            controller.borrow_mut().load_catalog(personas);
        });
    }

    #[wasm_bindgen(getter, js_name = sessionId)]
    pub fn session_id(&self) -> Option<String> {
        self.controller.borrow().session_id().map(String::from)
    }

    #[wasm_bindgen(js_name = setQuestion)]
    pub fn set_question(&self, question: String) -> bool {
        self.controller.borrow_mut().set_question(question)
    }

    /// Select a persona from the loaded catalog by id.
    #[wasm_bindgen(js_name = selectPersona)]
    pub fn select_persona(&self, persona_id: &str) -> bool {
        self.controller.borrow_mut().select_persona_by_id(persona_id)
    }

    /// Select a persona supplied as a JSON object, for hosts that fetch the
    /// catalog themselves.
    #[wasm_bindgen(js_name = selectPersonaJson)]
    pub fn select_persona_json(&self, persona_json: &str) -> Result<bool, JsValue> {
        let persona: Persona = serde_json::from_str(persona_json)
            .map_err(|e| to_js(DebateError::from(e)))?;
        Ok(self.controller.borrow_mut().select_persona(persona))
    }

    #[wasm_bindgen(js_name = deselectPersona)]
    pub fn deselect_persona(&self, persona_id: &str) -> bool {
        self.controller.borrow_mut().deselect_persona(persona_id)
    }

    /// Request a debate run. Rejects with the validation or connectivity
    /// message when the start guard fails.
    pub fn start(&self) -> Result<(), JsValue> {
        self.controller.borrow_mut().request_start().map_err(to_js)
    }

    pub fn reset(&self) {
        self.controller.borrow_mut().reset();
    }

    /// Replace the transport with one addressed by a freshly generated id.
    #[wasm_bindgen(js_name = newSession)]
    pub fn new_session(&self) -> Result<String, JsValue> {
        self.controller.borrow_mut().new_session().map_err(to_js)
    }

    #[wasm_bindgen(js_name = openSession)]
    pub fn open_session(&self, session_id: &str) -> Result<(), JsValue> {
        self.controller.borrow_mut().open_session(session_id).map_err(to_js)
    }

    /// Apply everything the transport delivered since the last call.
    pub fn poll(&self) -> bool {
        self.controller.borrow_mut().poll()
    }

    #[wasm_bindgen(js_name = viewJson)]
    pub fn view_json(&self) -> Result<String, JsValue> {
        self.controller.borrow().view().to_json().map_err(to_js)
    }

    #[wasm_bindgen(getter)]
    pub fn tension(&self) -> u8 {
        self.controller.borrow().tension()
    }

    #[wasm_bindgen(getter, js_name = canStart)]
    pub fn can_start(&self) -> bool {
        self.controller.borrow().can_start()
    }
}

fn to_js(e: DebateError) -> JsValue {
    JsValue::from_str(&e.to_string())
}
