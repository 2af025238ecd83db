//! The demo page: one resizable container full of tier-dependent labels.

use roomy::{
    container_rem, container_rem_root, cx, display, responsive_css, Breakpoint, Breakpoints,
    ClassName, Element, MatchContext, MemoryElement, MemoryResizeSource, ResponsiveObserver,
    Style, StyleEngine, StyleSheet, Tiers,
};
use serde::Serialize;
use serde_json::json;

/// A label whose visibility depends on the container tier.
pub struct DemoLabel {
    pub name: &'static str,
    pub class: ClassName,
}

/// Classes registered for the demo page.
pub struct DemoPage {
    pub sheet: StyleSheet,
    pub container: ClassName,
    pub cem_root: ClassName,
    pub colored_text: ClassName,
    pub labels: Vec<DemoLabel>,
}

impl DemoPage {
    pub fn build(mut sheet: StyleSheet) -> Self {
        let frame = sheet.css(&Style::from(json!({
            "padding": "8px",
            "border": "1px solid red",
            "marginBottom": "12px",
        })));
        let container = cx([frame, container_rem(&mut sheet)]);
        let cem_root = container_rem_root(&mut sheet);

        let colored_text = responsive_css(
            &mut sheet,
            json!({
                "display": "block",
                "color": "orange",
                ".SM": { "color": "red" },
                ".MD": { "color": "blue" },
                ".LG": { "color": "green" },
                ".XL": { "color": "purple" },
            }),
        );

        let mut labels = Vec::new();
        let mut label = |name: &'static str, class: ClassName| labels.push(DemoLabel { name, class });

        label("XS", display(&mut sheet, (Breakpoint::Xs, "block")));
        for (name, bp) in [
            ("SM", Breakpoint::Sm),
            ("MD", Breakpoint::Md),
            ("LG", Breakpoint::Lg),
            ("XL", Breakpoint::Xl),
        ] {
            label(name, cx([display(&mut sheet, "none"), display(&mut sheet, (bp, "block"))]));
        }

        label("XS-ONLY", display(&mut sheet, (Breakpoint::Sm, "none")));
        for (name, from, until) in [
            ("SM-ONLY", Breakpoint::Sm, Breakpoint::Md),
            ("MD-ONLY", Breakpoint::Md, Breakpoint::Lg),
            ("LG-ONLY", Breakpoint::Lg, Breakpoint::Xl),
        ] {
            label(
                name,
                cx([
                    display(&mut sheet, "none"),
                    display(&mut sheet, (from, "block")),
                    display(&mut sheet, (until, "none")),
                ]),
            );
        }
        label(
            "XL-ONLY",
            cx([display(&mut sheet, "none"), display(&mut sheet, (Breakpoint::Xl, "block"))]),
        );

        label(
            "MD, LG, XL only",
            cx([display(&mut sheet, (Breakpoint::Md, "block")), display(&mut sheet, "none")]),
        );
        label(
            "XS, SM, MD only",
            cx([display(&mut sheet, "block"), display(&mut sheet, (Breakpoint::Lg, "none"))]),
        );

        Self {
            sheet,
            container,
            cem_root,
            colored_text,
            labels,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LabelState {
    pub name: &'static str,
    pub display: String,
    pub visible: bool,
}

#[derive(Debug, Serialize)]
pub struct Visibility {
    pub width: f64,
    pub tiers: Vec<&'static str>,
    pub cem: Option<String>,
    pub color: Option<String>,
    pub labels: Vec<LabelState>,
}

/// Mounts the demo container, resizes it to `width` and resolves what
/// each label would show.
pub fn visibility(page: &DemoPage, breakpoints: Breakpoints, width: f64) -> Visibility {
    let mut observer = ResponsiveObserver::with_breakpoints(MemoryResizeSource::new(), breakpoints);
    let container = MemoryElement::with_classes(page.container.tokens());
    observer.register(container.clone());
    let batch = observer.source().entries([(&container, width)]);
    observer.on_resize(&batch);

    let tiers: Tiers = Breakpoint::ALL
        .into_iter()
        .filter(|bp| container.has_marker(bp.class_name()))
        .collect();
    let resolve = |class: &ClassName, property: &str| {
        let ctx = MatchContext::element(class.tokens()).inside(container.classes());
        page.sheet.resolve(&ctx, property).map(str::to_string)
    };

    let labels = page
        .labels
        .iter()
        .map(|label| {
            let display = resolve(&label.class, "display").unwrap_or_else(|| "inline".to_string());
            LabelState {
                name: label.name,
                visible: display != "none",
                display,
            }
        })
        .collect();

    Visibility {
        width,
        tiers: tiers.class_names(),
        cem: resolve(&page.cem_root, "--cem"),
        color: resolve(&page.colored_text, "color"),
        labels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roomy::ClassNaming;

    fn page() -> DemoPage {
        DemoPage::build(StyleSheet::with_naming(ClassNaming::Sequential))
    }

    fn visible_names(v: &Visibility) -> Vec<&'static str> {
        v.labels.iter().filter(|l| l.visible).map(|l| l.name).collect()
    }

    #[test]
    fn test_narrow_container() {
        let v = visibility(&page(), Breakpoints::default(), 200.0);
        assert_eq!(v.tiers, vec!["XS"]);
        assert_eq!(visible_names(&v), vec!["XS", "XS-ONLY", "XS, SM, MD only"]);
        assert_eq!(v.cem.as_deref(), Some("0.5rem"));
        assert_eq!(v.color.as_deref(), Some("orange"));
    }

    #[test]
    fn test_medium_container() {
        let v = visibility(&page(), Breakpoints::default(), 600.0);
        assert_eq!(v.tiers, vec!["XS", "SM", "MD"]);
        assert_eq!(
            visible_names(&v),
            vec!["XS", "SM", "MD", "MD-ONLY", "MD, LG, XL only", "XS, SM, MD only"]
        );
        assert_eq!(v.cem.as_deref(), Some("1.5rem"));
        assert_eq!(v.color.as_deref(), Some("blue"));
    }

    #[test]
    fn test_wide_container() {
        let v = visibility(&page(), Breakpoints::default(), 1000.0);
        assert_eq!(
            visible_names(&v),
            vec!["XS", "SM", "MD", "LG", "XL", "XL-ONLY", "MD, LG, XL only"]
        );
    }

    #[test]
    fn test_page_registers_container_rules() {
        let page = page();
        assert_eq!(page.container.as_str(), "css-0 css-1");
        let css = page.sheet.to_css();
        assert!(css.contains(".css-1{--cem:0.5rem;}"));
        assert!(css.contains(".css-1.SM{--cem:1rem;}"));
        assert!(css.contains(".css-0{padding:8px;border:1px solid red;margin-bottom:12px;}"));
    }
}
