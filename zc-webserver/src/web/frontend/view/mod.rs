use maud::{html, Markup, PreEscaped};

use crate::core::{
    entities::*,
    registry::MapRegistry,
    util::{
        query::{codes_param, name_param},
        validate::NewGroupInvalidation,
    },
};

mod page;

use page::*;

const LEAFLET_CSS_URL: &str = "https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.4.0/leaflet.css";
const LEAFLET_CSS_SHA512: &str =
    "sha512-puBpdR0798OZvTTbP4A8Ix/l+A4dHDD0DGqYW6RQ+9jxkRFclaxxQb/SJAWZfWAkuyeQUytO7+7N4QKrDh+drA==";
const LEAFLET_JS_URL: &str = "https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.4.0/leaflet.js";
const LEAFLET_JS_SHA512: &str =
    "sha512-QVftwZFqvtRNi0ZyCtsznlKSWOStnDORoefr1enyq5mVL4tmKB3S/EnC3rRJcxCPavG10IcrVGSmPh6Qw5lwrg==";
const MAP_JS_URL: &str = "/map.js";

const TITLE: &str = "Zip Crusher";

/// The entered values of the group that should be added.
#[derive(Debug, Default)]
pub struct GroupForm<'a> {
    pub name: &'a str,
    pub codes: &'a str,
    pub invalidation: Option<NewGroupInvalidation>,
    pub message: Option<String>,
}

pub fn index(groups: &[Group], form: &GroupForm) -> Markup {
    let name_error = form.invalidation.as_ref().and_then(|i| i.name.as_ref());
    let codes_error = form.invalidation.as_ref().and_then(|i| i.codes.as_ref());
    let palette_full = groups.len() >= Color::PALETTE_SIZE;
    page(
        TITLE,
        None,
        html! {
            main class="builder" {
                h1 { (TITLE) }
                form #formAdd action="/groups" method="POST" {
                    div #groups {
                        p #noGroupMessage .hidden[!groups.is_empty()] {
                            "No groups have been defined yet."
                        }
                        @for g in groups {
                            (group_entry(g))
                        }
                    }
                    @if let Some(msg) = form.message.as_ref().filter(|_| form.invalidation.is_none()) {
                        p class="error" { (msg) }
                    }
                    div #groupNameGroup .form-group .has-error[name_error.is_some()] {
                        label for="groupName" { "Group name" }
                        input #groupName type="text" name="groupName" value=(form.name);
                        @if let Some(err) = name_error {
                            span class="help-block" { (err.to_string()) }
                        }
                    }
                    div #groupCodesGroup .form-group .has-error[codes_error.is_some()] {
                        label for="groupCodes" { "Zip codes (comma separated)" }
                        input #groupCodes type="text" name="groupCodes" value=(form.codes)
                            placeholder="98006, 98007+1234";
                        @if let Some(err) = codes_error {
                            span class="help-block" { (err.to_string()) }
                        }
                    }
                    div class="buttons" {
                        button #btnAdd class="btn" type="submit" disabled[palette_full] { "Add group" }
                        button #btnRender class="btn" type="submit" formaction="/map" formmethod="GET"
                            disabled[groups.is_empty()] { "Render map" }
                    }
                }
            }
        },
    )
}

fn group_entry(group: &Group) -> Markup {
    let codes: Vec<_> = group.zip_codes.iter().map(ZipCode::as_str).collect();
    html! {
        div id=(format!("group{}", group.id)) class="form-group zip-group" {
            h4 class=(format!("color-{}", group.color)) { (group.name) }
            input type="hidden" name=(name_param(group.id)) value=(group.name);
            p { (codes.join(", ")) }
            input type="hidden" name=(codes_param(group.id)) value=(codes.join(","));
        }
    }
}

fn leaflet_css_link() -> Markup {
    html! {
            link
                rel="stylesheet"
                href=(LEAFLET_CSS_URL)
                integrity=(LEAFLET_CSS_SHA512)
                crossorigin="anonymous";
    }
}

pub fn map<L>(registry: &MapRegistry<L>, setup_json: &str) -> Markup {
    page(
        TITLE,
        Some(leaflet_css_link()),
        html! {
            div class="map-page" {
                div #panel {
                    @if registry.groups().is_empty() {
                        p { "No groups to display." }
                    }
                    @for g in registry.groups() {
                        div class="group" data-group=(g.id.number()) {
                            h3 class=(format!("color-{}", g.color)) { (g.name) }
                            @for s in registry.group_selectors(g.id) {
                                @let key = s.key.to_string();
                                div class="zip" {
                                    input type="checkbox"
                                        id=(key)
                                        value=(key)
                                        data-group=(g.id.number())
                                        data-code=(s.key.zip_code.as_str())
                                        checked[s.checked]
                                        disabled[!s.enabled];
                                    label for=(key) title=[s.title.as_deref()] .center[s.focusable] {
                                        " " (s.key.zip_code.as_str())
                                    }
                                }
                            }
                        }
                    }
                }
                div #map {}
            }
            (map_scripts(setup_json))
        },
    )
}

fn map_scripts(setup_json: &str) -> Markup {
    // The setup is embedded into a script element that must not be terminated early.
    let setup_json = setup_json.replace('<', "\\u003c");
    html! {
      script {
        (PreEscaped(format!("window.ZC_MAP_SETUP={setup_json};")))
      }
      script
        src=(LEAFLET_JS_URL)
        integrity=(LEAFLET_JS_SHA512)
        crossorigin="anonymous" {}
      script src=(MAP_JS_URL){}
    }
}
