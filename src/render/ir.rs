use crate::model::SectionId;

/// Format-agnostic intermediate representation of one rendered section.
///
/// Composers produce exactly one of these per included section; the two
/// format adapters turn it into either paginated draw calls or flowed
/// tree nodes. Content parity between the targets holds because neither
/// adapter ever sees section data directly, only this IR.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionIr {
    pub id: SectionId,
    pub title: String,
    pub blocks: Vec<Block>,
}

impl SectionIr {
    pub fn new(id: SectionId) -> Self {
        SectionIr {
            id,
            title: id.title().to_string(),
            blocks: Vec::new(),
        }
    }

    pub fn subheading(mut self, text: impl Into<String>) -> Self {
        self.blocks.push(Block::Subheading(text.into()));
        self
    }

    pub fn paragraph(mut self, text: impl Into<String>) -> Self {
        self.blocks.push(Block::Paragraph(text.into()));
        self
    }

    pub fn key_values(mut self, pairs: Vec<(String, String)>) -> Self {
        self.blocks.push(Block::KeyValues(pairs));
        self
    }

    pub fn table(mut self, table: TableBlock) -> Self {
        self.blocks.push(Block::Table(table));
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Subheading(String),
    Paragraph(String),
    /// Label/value pairs, label emphasized; used for record-shaped data.
    KeyValues(Vec<(String, String)>),
    Table(TableBlock),
}

/// A fixed-width table: column labels with relative width weights plus
/// stringly-rendered rows. Layout (absolute widths, fonts, pagination) is
/// the adapters' business.
#[derive(Debug, Clone, PartialEq)]
pub struct TableBlock {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub label: String,
    /// Relative width weight; adapters scale against the weight sum.
    pub weight: f32,
}

impl TableBlock {
    pub fn new(columns: Vec<(&str, f32)>) -> Self {
        TableBlock {
            columns: columns
                .into_iter()
                .map(|(label, weight)| Column {
                    label: label.to_string(),
                    weight,
                })
                .collect(),
            rows: Vec::new(),
        }
    }

    pub fn row(&mut self, cells: Vec<String>) {
        debug_assert_eq!(cells.len(), self.columns.len());
        self.rows.push(cells);
    }

    pub fn weight_sum(&self) -> f32 {
        self.columns.iter().map(|c| c.weight).sum()
    }
}
