use super::EffectsContext;
use std::rc::Rc;
use wasm_bindgen::JsValue;

const LOADER_CSS: &str = r#"
#loading-screen {
    position: fixed;
    top: 0;
    left: 0;
    width: 100%;
    height: 100%;
    background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
    display: flex;
    align-items: center;
    justify-content: center;
    z-index: 10000;
    transition: opacity 0.5s ease;
}
.loader-container {
    text-align: center;
    color: white;
}
.loader-spinner {
    position: relative;
    width: 80px;
    height: 80px;
    margin: 0 auto 2rem;
}
.spinner-ring {
    position: absolute;
    width: 100%;
    height: 100%;
    border: 4px solid transparent;
    border-top: 4px solid #fff;
    border-radius: 50%;
    animation: spin 1s linear infinite;
}
.spinner-ring:nth-child(2) {
    width: 70%;
    height: 70%;
    top: 15%;
    left: 15%;
    animation-delay: 0.2s;
}
.spinner-ring:nth-child(3) {
    width: 40%;
    height: 40%;
    top: 30%;
    left: 30%;
    animation-delay: 0.4s;
}
.loader-text {
    font-size: 1.5rem;
    font-weight: 600;
    margin-bottom: 2rem;
    animation: pulse 2s infinite;
}
.loader-progress {
    width: 300px;
    margin: 0 auto;
}
@keyframes spin {
    0% { transform: rotate(0deg); }
    100% { transform: rotate(360deg); }
}
"#;

const EFFECTS_CSS: &str = r#"
@keyframes ripple {
    to {
        transform: scale(4);
        opacity: 0;
    }
}
@keyframes fadeOut {
    to {
        opacity: 0;
        transform: scale(0);
    }
}
@keyframes slideInLeft {
    from {
        opacity: 0;
        transform: translateX(-50px);
    }
    to {
        opacity: 1;
        transform: translateX(0);
    }
}
.tooltip {
    position: absolute;
    background: rgba(0, 0, 0, 0.8);
    color: white;
    padding: 0.5rem 1rem;
    border-radius: 4px;
    font-size: 0.875rem;
    pointer-events: none;
    z-index: 10000;
    transform: translateX(-50%);
}
.fab {
    opacity: 0;
    transition: all 0.3s ease;
}
.fab:hover {
    background: linear-gradient(135deg, #4f46e5 0%, #7c3aed 100%);
}
.dark-theme {
    --text-primary: #f9fafb;
    --text-secondary: #d1d5db;
    --text-light: #9ca3af;
    --bg-primary: #111827;
    --bg-secondary: #1f2937;
    --bg-accent: #374151;
    --border-color: #374151;
}
"#;

pub(crate) fn inject(context: &Rc<EffectsContext>) -> Result<(), JsValue> {
    let head = context
        .document
        .head()
        .ok_or_else(|| JsValue::from_str("document has no <head>"))?;

    for css in [LOADER_CSS, EFFECTS_CSS] {
        let style = context.document.create_element("style")?;
        style.set_text_content(Some(css));
        head.append_child(&style)?;
    }

    Ok(())
}
