use core::fmt::{self, Write};

use alloc::string::String;
use alloc::vec::Vec;

use crate::class::{self, cx};
use crate::rail::Rail;
use crate::{InlineStyle, PageDirection};

/// An item node that can be written as markup.
///
/// Text (`str`, `String`) is escaped; wrap pre-rendered markup in [`Markup`].
pub trait Node {
    fn write_html(&self, out: &mut dyn Write) -> fmt::Result;
}

impl Node for str {
    fn write_html(&self, out: &mut dyn Write) -> fmt::Result {
        write_escaped(out, self, false)
    }
}

impl Node for String {
    fn write_html(&self, out: &mut dyn Write) -> fmt::Result {
        self.as_str().write_html(out)
    }
}

impl<T: Node + ?Sized> Node for &T {
    fn write_html(&self, out: &mut dyn Write) -> fmt::Result {
        (**self).write_html(out)
    }
}

/// Trusted markup, written verbatim.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Markup(pub String);

impl Node for Markup {
    fn write_html(&self, out: &mut dyn Write) -> fmt::Result {
        out.write_str(&self.0)
    }
}

fn write_escaped(out: &mut dyn Write, s: &str, attribute: bool) -> fmt::Result {
    for c in s.chars() {
        match c {
            '&' => out.write_str("&amp;")?,
            '<' => out.write_str("&lt;")?,
            '>' => out.write_str("&gt;")?,
            '"' if attribute => out.write_str("&quot;")?,
            '\'' if attribute => out.write_str("&#39;")?,
            c => out.write_char(c)?,
        }
    }
    Ok(())
}

fn write_attr(out: &mut dyn Write, name: &str, value: &str) -> fmt::Result {
    write!(out, " {name}=\"")?;
    write_escaped(out, value, true)?;
    out.write_char('"')
}

/// The focusable, labeled scroll region.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrollerView {
    pub id: String,
    pub role: &'static str,
    pub aria_label: String,
    pub tab_index: i32,
    pub class: String,
    pub style: InlineStyle,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemView<'a, N> {
    pub index: usize,
    pub class: String,
    pub node: &'a N,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ControlView {
    pub direction: PageDirection,
    pub aria_label: &'static str,
    /// Id of the scroll region this control pages.
    pub aria_controls: String,
    pub disabled: bool,
    pub class: String,
    pub glyph: &'static str,
}

/// Render model of one rail render pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RailView<'a, N> {
    pub root_class: String,
    pub scroller: ScrollerView,
    pub items: Vec<ItemView<'a, N>>,
    /// Backward then forward, present only while controls are visible.
    pub controls: Option<[ControlView; 2]>,
}

impl<'a, N> RailView<'a, N> {
    pub(crate) fn build(rail: &'a Rail<N>) -> Self {
        let options = rail.options();
        let hooks = &options.class_names;
        let snap = options.snap;

        let root_class = cx([
            Some(class::ROOT),
            options.class_name.as_deref(),
            hooks.root.as_deref(),
        ]);

        let overrides = &options.scroller_style;
        let style = InlineStyle::scroller_baseline().merged(overrides);
        let scroller = ScrollerView {
            id: rail.region_id().into(),
            role: "region",
            aria_label: options.aria_label.clone(),
            tab_index: 0,
            class: cx([
                Some(class::SCROLLER),
                snap.then_some(class::SNAP),
                options.gap_class_name.as_deref(),
                hooks.scroller.as_deref(),
            ]),
            style,
        };

        let item_class = cx([
            Some(class::ITEM),
            snap.then_some(class::SNAP_ITEM),
            hooks.item.as_deref(),
        ]);
        let items = rail
            .content()
            .iter()
            .enumerate()
            .map(|(index, node)| ItemView {
                index,
                class: item_class.clone(),
                node,
            })
            .collect();

        let controls = rail.controls_visible().then(|| {
            let paging = rail.paging_state();
            let custom = hooks.has_custom_controls().then_some(class::CONTROL_CUSTOM);
            let control = |direction: PageDirection| {
                let (edge, glyph, per_direction) = match direction {
                    PageDirection::Backward => (class::PREV, "\u{2039}", &hooks.prev_button),
                    PageDirection::Forward => (class::NEXT, "\u{203a}", &hooks.next_button),
                };
                ControlView {
                    direction,
                    aria_label: direction.label(),
                    aria_controls: rail.region_id().into(),
                    disabled: !paging.can_page(direction),
                    class: cx([
                        Some(class::CONTROL),
                        custom,
                        Some(edge),
                        hooks.control_button.as_deref(),
                        per_direction.as_deref(),
                    ]),
                    glyph,
                }
            };
            [
                control(PageDirection::Backward),
                control(PageDirection::Forward),
            ]
        });

        Self {
            root_class,
            scroller,
            items,
            controls,
        }
    }

    pub fn control(&self, direction: PageDirection) -> Option<&ControlView> {
        self.controls
            .as_ref()
            .and_then(|c| c.iter().find(|c| c.direction == direction))
    }
}

impl<N: Node> RailView<'_, N> {
    /// Writes the rail markup.
    pub fn write_html(&self, out: &mut dyn Write) -> fmt::Result {
        out.write_str("<div")?;
        write_attr(out, "class", &self.root_class)?;
        out.write_char('>')?;

        let s = &self.scroller;
        out.write_str("<div")?;
        write_attr(out, "role", s.role)?;
        write_attr(out, "aria-label", &s.aria_label)?;
        write!(out, " tabindex=\"{}\"", s.tab_index)?;
        write_attr(out, "class", &s.class)?;
        if !s.style.is_empty() {
            let mut style = String::new();
            write!(style, "{}", s.style)?;
            write_attr(out, "style", &style)?;
        }
        write_attr(out, "id", &s.id)?;
        out.write_char('>')?;

        for item in &self.items {
            out.write_str("<div")?;
            write_attr(out, "class", &item.class)?;
            out.write_char('>')?;
            item.node.write_html(out)?;
            out.write_str("</div>")?;
        }
        out.write_str("</div>")?;

        for control in self.controls.iter().flatten() {
            out.write_str("<button type=\"button\"")?;
            if control.disabled {
                out.write_str(" disabled")?;
            }
            write_attr(out, "aria-controls", &control.aria_controls)?;
            write_attr(out, "aria-label", control.aria_label)?;
            write_attr(out, "class", &control.class)?;
            out.write_char('>')?;
            out.write_str(control.glyph)?;
            out.write_str("</button>")?;
        }

        out.write_str("</div>")
    }

    /// Renders the markup into a new `String`.
    ///
    /// Fails only when an item's [`Node::write_html`] fails; no partial markup is returned.
    pub fn to_html(&self) -> Result<String, fmt::Error> {
        let mut out = String::new();
        self.write_html(&mut out)?;
        Ok(out)
    }
}
