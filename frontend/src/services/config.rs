use std::collections::BTreeMap;

use anyhow::{anyhow, bail, ensure, Context};
use portfolio_shared::Section;
use wasm_bindgen::JsValue;

/// Where the page scripts find their data and their mount points
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    /// Prefix for the static data files; empty means relative to the page
    pub base_url: String,
    pub experience_path: String,
    pub skills_path: String,
    /// Page container each section renders into. A section without one is not rendered.
    pub section_containers: BTreeMap<Section, String>,
    /// `<template>` every entry view is cloned from
    pub entry_template_id: String,
    pub skills_grid_id: String,
    pub like_root_id: String,
    pub connect_button_id: String,
    pub connect_menu_id: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            experience_path: "data/experience.json".to_string(),
            skills_path: "data/skills.json".to_string(),
            section_containers: Section::ALL
                .into_iter()
                .map(|section| (section, section.container_id().to_string()))
                .collect(),
            entry_template_id: "exp-tpl".to_string(),
            skills_grid_id: "skills-grid".to_string(),
            like_root_id: "like-root".to_string(),
            connect_button_id: "connect-btn".to_string(),
            connect_menu_id: "connect-menu".to_string(),
        }
    }
}

impl SiteConfig {
    pub fn container_id(&self, section: Section) -> Option<&str> {
        self.section_containers.get(&section).map(String::as_str)
    }
}

/// Settings for the remote like counter, injected by the page as `window.__ENV__`
#[derive(Clone, Debug, PartialEq)]
pub struct LikeConfig {
    pub supabase_url: String,
    pub anon_key: String,
}

impl LikeConfig {
    pub fn new(supabase_url: &str, anon_key: &str) -> anyhow::Result<Self> {
        ensure!(!supabase_url.trim().is_empty(), "SUPABASE_URL is empty");
        ensure!(!anon_key.trim().is_empty(), "SUPABASE_ANON_KEY is empty");
        Ok(Self {
            supabase_url: supabase_url.trim().trim_end_matches('/').to_string(),
            anon_key: anon_key.trim().to_string(),
        })
    }

    pub fn from_window() -> anyhow::Result<Self> {
        let window = web_sys::window().context("no window")?;
        let env = js_sys::Reflect::get(&window, &JsValue::from_str("__ENV__"))
            .map_err(|_| anyhow!("window.__ENV__ is not readable"))?;
        if env.is_undefined() || env.is_null() {
            bail!("Supabase env vars missing");
        }

        let url = read_string(&env, "SUPABASE_URL").context("Supabase env vars missing")?;
        let key = read_string(&env, "SUPABASE_ANON_KEY").context("Supabase env vars missing")?;
        Self::new(&url, &key)
    }

    /// PostgREST RPC endpoint for `function`
    pub fn rpc_url(&self, function: &str) -> String {
        format!("{}/rest/v1/rpc/{}", self.supabase_url, function)
    }
}

fn read_string(object: &JsValue, key: &str) -> Option<String> {
    js_sys::Reflect::get(object, &JsValue::from_str(key))
        .ok()
        .and_then(|value| value.as_string())
}
