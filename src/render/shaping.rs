use unicode_bidi::BidiInfo;

/// Pluggable legend label shaping step.
///
/// The renderer applies this once per render call over the ordered category
/// list, so the chart-layout logic stays independent of any particular
/// text-shaping library.
pub trait LabelShaper {
    fn shape(&self, label: &str) -> String;
}

/// No-op shaper for hosts whose text stack performs bidi layout itself.
#[derive(Debug, Default, Clone, Copy)]
pub struct PassthroughShaper;

impl LabelShaper for PassthroughShaper {
    fn shape(&self, label: &str) -> String {
        label.to_owned()
    }
}

/// Default shaper for display layers without native bidi support.
///
/// Joins Arabic letterforms into their presentation forms, then reorders
/// right-to-left runs into visual order so the label reads correctly inside
/// a left-to-right legend. Labels without RTL content pass through
/// unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct BidiShaper;

impl LabelShaper for BidiShaper {
    fn shape(&self, label: &str) -> String {
        if label.is_empty() {
            return String::new();
        }

        let joined = arabic_reshaper::arabic_reshape(label);
        let bidi = BidiInfo::new(&joined, None);
        let Some(paragraph) = bidi.paragraphs.first() else {
            return joined;
        };
        bidi.reorder_line(paragraph, paragraph.range.clone())
            .into_owned()
    }
}
