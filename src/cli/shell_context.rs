use crate::config::{Config, ConfigManager};
use crate::tracker::{ActivityStore, CategoryCatalog, IdGenerator, SelectionMode, UuidIds};

use super::core::CliError;
use super::forms::ActivityForm;
use super::list_view::ViewStyle;
use super::output::{self, OutputPreferences};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

/// Everything one shell session owns: the catalog, the store and the form
/// draft. Activities live only as long as the session.
pub struct ShellContext<G: IdGenerator = UuidIds> {
    pub mode: CliMode,
    pub(crate) catalog: CategoryCatalog,
    pub(crate) store: ActivityStore,
    pub(crate) form: ActivityForm<G>,
    pub(crate) style: ViewStyle,
    pub(crate) running: bool,
}

impl ShellContext<UuidIds> {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config = ConfigManager::new().load()?;
        let context = Self::with_parts(mode, &config, UuidIds);
        output::set_preferences(OutputPreferences {
            color: context.style.color,
        });
        Ok(context)
    }
}

impl<G: IdGenerator> ShellContext<G> {
    /// Script mode never colors output.
    pub fn with_parts(mode: CliMode, config: &Config, ids: G) -> Self {
        let catalog = CategoryCatalog::default();
        let form = ActivityForm::new(&catalog, ids);
        let mut style = ViewStyle::from(config);
        if mode == CliMode::Script {
            style.color = false;
        }
        Self {
            mode,
            catalog,
            store: ActivityStore::new(),
            form,
            style,
            running: true,
        }
    }

    pub fn prompt(&self) -> String {
        match self.store.state().mode() {
            SelectionMode::Create => "calories> ".to_string(),
            SelectionMode::Edit => format!("calories [edit {}]> ", self.form.draft().name),
        }
    }
}
