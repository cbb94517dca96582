use crate::areas::snapshot::IgnoreSet;
use crate::artifacts::diff_tree::builder::DiffTreeBuilder;
use crate::artifacts::expanders::content::ContentExpander;
use crate::artifacts::expanders::directory::DirectoryExpander;
use crate::artifacts::expanders::structural::StructuralExpander;
use crate::artifacts::report::change_filter::ChangeFilter;
use crate::artifacts::structure::rust_extractor::RustExtractor;
use derive_new::new;
use std::cell::{RefCell, RefMut};
use std::sync::Arc;

#[derive(Debug, Clone, Default, new)]
pub struct ComparisonOptions {
    pub ignore: IgnoreSet,
    pub filter: ChangeFilter,
    /// Also write `<right>.html` next to every right-hand snapshot
    pub html: bool,
}

/// Session comparing snapshot pairs and writing their reports
pub struct Comparison {
    writer: RefCell<Box<dyn std::io::Write>>,
    options: ComparisonOptions,
    builder: Arc<DiffTreeBuilder>,
}

impl Comparison {
    pub fn new(writer: Box<dyn std::io::Write>, options: ComparisonOptions) -> Self {
        let builder = Arc::new(diff_tree_builder(options.ignore.clone()));

        Comparison {
            writer: RefCell::new(writer),
            options,
            builder,
        }
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn options(&self) -> &ComparisonOptions {
        &self.options
    }

    pub fn builder(&self) -> Arc<DiffTreeBuilder> {
        self.builder.clone()
    }
}

/// Builder with every known expander, structural ones ahead of the byte comparison
pub fn diff_tree_builder(ignore: IgnoreSet) -> DiffTreeBuilder {
    DiffTreeBuilder::new()
        .with_expander(DirectoryExpander::new(ignore))
        .with_expander(StructuralExpander::new(RustExtractor))
        .with_expander(ContentExpander)
}
