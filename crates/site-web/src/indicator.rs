//! Side indicator, a pure view of navigator state: one marker per section,
//! the active one enlarged and tinted, hidden entirely until the first
//! index change.

use crate::constants::{
    INDICATOR_ID, MARKER_ACTIVE_COLOR, MARKER_ACTIVE_HEIGHT_PX, MARKER_ACTIVE_WIDTH_PX,
    MARKER_IDLE_COLOR, MARKER_IDLE_HEIGHT_PX, MARKER_IDLE_WIDTH_PX, MARKER_ID_PREFIX,
    MARKER_TRANSITION,
};
use site_core::{Navigator, Sections};
use web_sys as web;

pub fn marker_id(index: usize) -> String {
    format!("{MARKER_ID_PREFIX}{index}")
}

/// Creates one marker button per section inside the indicator container.
pub fn build(document: &web::Document, sections: &Sections) -> anyhow::Result<()> {
    let container = document
        .get_element_by_id(INDICATOR_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{INDICATOR_ID}"))?;
    for index in 0..sections.len() {
        let marker = document
            .create_element("button")
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        marker.set_id(&marker_id(index));
        if let Some(label) = sections.label(index) {
            _ = marker.set_attribute("aria-label", &format!("Go to {label}"));
        }
        container
            .append_child(&marker)
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    }
    Ok(())
}

/// Restyles every marker from current navigator state. Safe to call
/// redundantly; markers a host page removed are skipped.
pub fn refresh(document: &web::Document, navigator: &Navigator) {
    if let Some(container) = document.get_element_by_id(INDICATOR_ID) {
        let style = if navigator.indicator_visible() {
            ""
        } else {
            "display:none"
        };
        _ = container.set_attribute("style", style);
    }
    for index in 0..navigator.section_count() {
        if let Some(marker) = document.get_element_by_id(&marker_id(index)) {
            _ = marker.set_attribute("style", &marker_style(index == navigator.active_index()));
        }
    }
}

fn marker_style(active: bool) -> String {
    let (width, height, color) = if active {
        (
            MARKER_ACTIVE_WIDTH_PX,
            MARKER_ACTIVE_HEIGHT_PX,
            MARKER_ACTIVE_COLOR,
        )
    } else {
        (
            MARKER_IDLE_WIDTH_PX,
            MARKER_IDLE_HEIGHT_PX,
            MARKER_IDLE_COLOR,
        )
    };
    format!(
        "width:{width}px;height:{height}px;background-color:{color};\
         border:none;border-radius:9999px;transition:{MARKER_TRANSITION}"
    )
}
