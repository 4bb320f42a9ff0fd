//! Optional speech input and output.
//!
//! The chat page talks to a `VoiceCapability` and never checks the platform
//! itself. `detect` runs once at mount and returns the browser implementation
//! when the Web Speech API is present, or `NoopVoice` otherwise (always on the
//! server).
//!
//! TRADE-OFFS
//! ==========
//! Speech recognition is still vendor-prefixed in most browsers and gated as an
//! unstable API in `web-sys`, so the recognizer is driven through `js_sys`
//! reflection. Synthesis uses the stable `web-sys` bindings.

#[cfg(test)]
#[path = "voice_test.rs"]
mod voice_test;

use std::rc::Rc;

/// Event reported by an active speech capture.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VoiceEvent {
    Transcript(String),
    Error(String),
    End,
}

impl VoiceEvent {
    /// Whether the recognizer is finished after this event and its session
    /// can be released.
    pub fn ends_capture(&self) -> bool {
        matches!(self, Self::Error(_) | Self::End)
    }
}

/// Speech recognition and synthesis as seen by the chat page.
pub trait VoiceCapability {
    fn can_listen(&self) -> bool;
    fn can_speak(&self) -> bool;
    /// Begin capture. `on_event` must not call back into `stop_listening`.
    fn start_listening(&self, on_event: Rc<dyn Fn(VoiceEvent)>);
    fn stop_listening(&self);
    /// Speak `text`, cancelling any utterance already playing.
    fn speak(&self, text: &str);
    fn cancel_speech(&self);
}

/// Stand-in used when the platform has no speech support.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopVoice;

impl VoiceCapability for NoopVoice {
    fn can_listen(&self) -> bool {
        false
    }

    fn can_speak(&self) -> bool {
        false
    }

    fn start_listening(&self, _on_event: Rc<dyn Fn(VoiceEvent)>) {}

    fn stop_listening(&self) {}

    fn speak(&self, _text: &str) {}

    fn cancel_speech(&self) {}
}

/// Pick the best available implementation for this platform.
pub fn detect() -> Rc<dyn VoiceCapability> {
    #[cfg(feature = "hydrate")]
    {
        let voice = browser::BrowserVoice::detect();
        if voice.can_listen() || voice.can_speak() {
            return Rc::new(voice);
        }
    }
    Rc::new(NoopVoice)
}

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::JsCast as _;
    use wasm_bindgen::prelude::*;

    use super::{VoiceCapability, VoiceEvent};

    const RECOGNIZER_NAMES: [&str; 2] = ["SpeechRecognition", "webkitSpeechRecognition"];
    const LANG: &str = "en-US";

    /// Web Speech API backed voice.
    pub struct BrowserVoice {
        recognizer_ctor: Option<js_sys::Function>,
        synthesis: Option<web_sys::SpeechSynthesis>,
        session: RefCell<Option<CaptureSession>>,
    }

    /// A running recognizer plus the JS callbacks it holds.
    struct CaptureSession {
        recognizer: JsValue,
        _on_result: Closure<dyn FnMut(JsValue)>,
        _on_error: Closure<dyn FnMut(JsValue)>,
        _on_end: Closure<dyn FnMut(JsValue)>,
    }

    impl BrowserVoice {
        pub fn detect() -> Self {
            let window = web_sys::window();
            let recognizer_ctor = window.as_ref().and_then(|w| {
                RECOGNIZER_NAMES.iter().find_map(|name| {
                    js_sys::Reflect::get(w, &JsValue::from_str(name))
                        .ok()
                        .and_then(|ctor| ctor.dyn_into::<js_sys::Function>().ok())
                })
            });
            let synthesis = window.and_then(|w| w.speech_synthesis().ok());
            Self { recognizer_ctor, synthesis, session: RefCell::new(None) }
        }
    }

    impl VoiceCapability for BrowserVoice {
        fn can_listen(&self) -> bool {
            self.recognizer_ctor.is_some()
        }

        fn can_speak(&self) -> bool {
            self.synthesis.is_some()
        }

        fn start_listening(&self, on_event: Rc<dyn Fn(VoiceEvent)>) {
            let Some(ctor) = &self.recognizer_ctor else {
                return;
            };
            self.stop_listening();

            let recognizer = match js_sys::Reflect::construct(ctor, &js_sys::Array::new()) {
                Ok(r) => r,
                Err(e) => {
                    leptos::logging::warn!("speech recognizer unavailable: {e:?}");
                    on_event(VoiceEvent::Error("unavailable".to_owned()));
                    return;
                }
            };
            set_prop(&recognizer, "lang", &JsValue::from_str(LANG));
            set_prop(&recognizer, "continuous", &JsValue::FALSE);
            set_prop(&recognizer, "interimResults", &JsValue::FALSE);

            let handler = on_event.clone();
            let on_result = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
                if let Some(text) = transcript_from_event(&event) {
                    handler(VoiceEvent::Transcript(text));
                }
            });
            let handler = on_event.clone();
            let on_error = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
                let reason = js_sys::Reflect::get(&event, &JsValue::from_str("error"))
                    .ok()
                    .and_then(|v| v.as_string())
                    .unwrap_or_else(|| "unknown".to_owned());
                handler(VoiceEvent::Error(reason));
            });
            let handler = on_event.clone();
            let on_end = Closure::<dyn FnMut(JsValue)>::new(move |_event: JsValue| handler(VoiceEvent::End));

            set_prop(&recognizer, "onresult", on_result.as_ref());
            set_prop(&recognizer, "onerror", on_error.as_ref());
            set_prop(&recognizer, "onend", on_end.as_ref());

            if let Err(e) = call_method(&recognizer, "start") {
                leptos::logging::warn!("speech recognizer failed to start: {e:?}");
                on_event(VoiceEvent::Error("start-failed".to_owned()));
                return;
            }

            *self.session.borrow_mut() = Some(CaptureSession {
                recognizer,
                _on_result: on_result,
                _on_error: on_error,
                _on_end: on_end,
            });
        }

        fn stop_listening(&self) {
            let Some(session) = self.session.borrow_mut().take() else {
                return;
            };
            // Detach handlers before the closures are dropped with the session.
            for name in ["onresult", "onerror", "onend"] {
                set_prop(&session.recognizer, name, &JsValue::NULL);
            }
            let _ = call_method(&session.recognizer, "abort");
        }

        fn speak(&self, text: &str) {
            let Some(synthesis) = &self.synthesis else {
                return;
            };
            synthesis.cancel();
            match web_sys::SpeechSynthesisUtterance::new_with_text(text) {
                Ok(utterance) => {
                    utterance.set_lang(LANG);
                    synthesis.speak(&utterance);
                }
                Err(e) => leptos::logging::warn!("speech synthesis failed: {e:?}"),
            }
        }

        fn cancel_speech(&self) {
            if let Some(synthesis) = &self.synthesis {
                synthesis.cancel();
            }
        }
    }

    fn set_prop(target: &JsValue, name: &str, value: &JsValue) {
        let _ = js_sys::Reflect::set(target, &JsValue::from_str(name), value);
    }

    fn call_method(target: &JsValue, name: &str) -> Result<JsValue, JsValue> {
        let method = js_sys::Reflect::get(target, &JsValue::from_str(name))?.dyn_into::<js_sys::Function>()?;
        method.call0(target)
    }

    /// `event.results[0][0].transcript`
    fn transcript_from_event(event: &JsValue) -> Option<String> {
        let results = js_sys::Reflect::get(event, &JsValue::from_str("results")).ok()?;
        let first = js_sys::Reflect::get_u32(&results, 0).ok()?;
        let alternative = js_sys::Reflect::get_u32(&first, 0).ok()?;
        js_sys::Reflect::get(&alternative, &JsValue::from_str("transcript")).ok()?.as_string()
    }
}
