use usergrid_business::{FetchService, TableState, UserGrid, UserRecord, UsersLoader};

/// Everything the data grid widget keeps between frames.
#[derive(Debug, Default)]
pub struct DataGridState {
    pub grid: UserGrid,
    pub table: TableState,
    loader: Option<UsersLoader>,
    load_requested: bool,
}

impl DataGridState {
    /// Grid already populated, skipping the fetch.
    pub fn with_records(records: Vec<UserRecord>) -> Self {
        Self {
            grid: UserGrid::with_records(records),
            load_requested: true,
            ..Self::default()
        }
    }

    /// Issues the one-shot users fetch on the first call. Completion repaints `ctx`.
    pub fn ensure_loading(&mut self, fetcher: &dyn FetchService, url: &str, ctx: &egui::Context) {
        if self.load_requested {
            return;
        }
        self.load_requested = true;

        let ctx = ctx.clone();
        self.loader = Some(UsersLoader::start(fetcher, url, move || {
            ctx.request_repaint();
        }));
    }

    /// Moves a finished fetch result into the grid.
    pub fn poll(&mut self) {
        let Some(result) = self.loader.as_ref().and_then(UsersLoader::poll) else {
            return;
        };
        self.grid.finish_load(result);
        self.loader = None;
    }

    pub fn is_loading(&self) -> bool {
        self.loader.is_some()
    }
}
