//! Field schema of a resource: what the form edits and the table shows.

/// Semantic type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    LongText,
    Number,
    Enum(&'static [&'static str]),
    Image,
    ImageList,
}

impl FieldKind {
    /// File-typed fields force a multipart payload.
    pub fn is_file(self) -> bool {
        matches!(self, FieldKind::Image | FieldKind::ImageList)
    }
}

/// How a value is rendered in a table cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellStyle {
    #[default]
    Plain,
    /// Text cut to the given number of characters, followed by `...`.
    Truncate(usize),
    /// Numeric value rendered as filled/empty stars out of the given maximum.
    Stars(u8),
    /// Value is a Font Awesome class name shown next to its icon.
    Icon,
}

impl CellStyle {
    pub fn render(self, value: &str) -> String {
        match self {
            CellStyle::Plain | CellStyle::Icon => value.to_string(),
            CellStyle::Truncate(limit) => {
                if value.chars().count() > limit {
                    let head: String = value.chars().take(limit).collect();
                    format!("{head}...")
                } else {
                    value.to_string()
                }
            }
            CellStyle::Stars(max) => {
                let filled = value.trim().parse::<f64>().unwrap_or(0.0).round();
                let filled = filled.clamp(0.0, f64::from(max)) as usize;
                let empty = usize::from(max) - filled;
                format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Wire name, used for payloads, search and record lookup.
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    /// Rendered as the `required` attribute; never checked client side.
    pub required: bool,
    pub default: Option<&'static str>,
    /// Directory the backend stores bare file names under.
    pub storage_prefix: Option<&'static str>,
    /// HTML input type override (`email`, `tel`, ...).
    pub input_type: Option<&'static str>,
    /// Whether the field gets a table column.
    pub listed: bool,
    pub cell: CellStyle,
}

impl FieldSpec {
    pub fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: false,
            default: None,
            storage_prefix: None,
            input_type: None,
            listed: true,
            cell: CellStyle::Plain,
        }
    }

    pub fn text(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Text)
    }

    pub fn long_text(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::LongText)
    }

    pub fn number(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Number)
    }

    pub fn choice(name: &'static str, label: &'static str, options: &'static [&'static str]) -> Self {
        Self::new(name, label, FieldKind::Enum(options))
    }

    pub fn image(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Image)
    }

    pub fn images(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::ImageList)
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn default_value(mut self, value: &'static str) -> Self {
        self.default = Some(value);
        self
    }

    pub fn stored_under(mut self, prefix: &'static str) -> Self {
        self.storage_prefix = Some(prefix);
        self
    }

    pub fn input(mut self, input_type: &'static str) -> Self {
        self.input_type = Some(input_type);
        self
    }

    pub fn unlisted(mut self) -> Self {
        self.listed = false;
        self
    }

    pub fn shown_as(mut self, cell: CellStyle) -> Self {
        self.cell = cell;
        self
    }

    /// HTML `type` attribute for the field's `<input>`.
    pub fn html_input_type(&self) -> &'static str {
        if let Some(input_type) = self.input_type {
            return input_type;
        }
        match self.kind {
            FieldKind::Number => "number",
            FieldKind::Image | FieldKind::ImageList => "file",
            _ => "text",
        }
    }
}

/// Ordered field list of a resource.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Schema {
    fields: Vec<FieldSpec>,
}

impl Schema {
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self { fields }
    }

    pub fn push(&mut self, field: FieldSpec) {
        self.fields.push(field);
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn has_files(&self) -> bool {
        self.fields.iter().any(|field| field.kind.is_file())
    }

    pub fn value_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|field| !field.kind.is_file())
    }

    pub fn file_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|field| field.kind.is_file())
    }

    pub fn listed(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|field| field.listed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_appends_ellipsis_only_past_the_limit() {
        let cell = CellStyle::Truncate(20);
        assert_eq!(cell.render("short message"), "short message");
        assert_eq!(
            cell.render("this message is definitely longer"),
            "this message is defi..."
        );
        assert_eq!(CellStyle::Truncate(3).render("ñandú"), "ñan...");
    }

    #[test]
    fn stars_fill_up_to_value_and_clamp() {
        assert_eq!(CellStyle::Stars(5).render("3"), "★★★☆☆");
        assert_eq!(CellStyle::Stars(5).render("9"), "★★★★★");
        assert_eq!(CellStyle::Stars(5).render("n/a"), "☆☆☆☆☆");
    }

    #[test]
    fn schema_detects_file_fields() {
        let schema = Schema::new(vec![
            FieldSpec::text("name", "Name"),
            FieldSpec::image("image", "Image"),
        ]);
        assert!(schema.has_files());
        assert_eq!(schema.value_fields().count(), 1);
        assert_eq!(schema.file_fields().next().map(|f| f.name), Some("image"));

        let plain = Schema::new(vec![FieldSpec::text("text", "Text")]);
        assert!(!plain.has_files());
    }

    #[test]
    fn input_type_follows_kind_unless_overridden() {
        assert_eq!(FieldSpec::number("count", "Count").html_input_type(), "number");
        assert_eq!(FieldSpec::image("image", "Image").html_input_type(), "file");
        assert_eq!(FieldSpec::text("email", "Email").input("email").html_input_type(), "email");
    }
}
