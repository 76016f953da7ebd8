// Holds the currently loaded dataset. Reloading swaps the whole thing.
use shared::models::{Dataset, Laptop};

pub struct ListingStore {
    current: Option<Dataset>,
}

impl ListingStore {
    pub fn new() -> Self {
        ListingStore { current: None }
    }

    /// Installs `dataset`, returning the one it replaced.
    pub fn replace(&mut self, dataset: Dataset) -> Option<Dataset> {
        tracing::debug!(source = %dataset.source, laptops = dataset.len(), "Replacing loaded dataset");
        self.current.replace(dataset)
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        self.current.as_ref()
    }

    /// Laptops of the current dataset, empty when nothing is loaded.
    pub fn laptops(&self) -> &[Laptop] {
        self.current
            .as_ref()
            .map(|d| d.laptops.as_slice())
            .unwrap_or(&[])
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}

impl Default for ListingStore {
    fn default() -> Self {
        Self::new()
    }
}
