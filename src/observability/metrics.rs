use crate::document::Document;
use crate::observability::labels::Labels;
use metrics::{counter, Counter};

const DOCUMENT: &str = "document";

fn document_labels<D: Document>(labels: &Labels) -> Labels {
    labels.clone_with_labels(&[(DOCUMENT, D::KIND.to_string())])
}

#[derive(Clone)]
pub struct FormatterMetrics {
    pub formatted: Counter,
    pub fallbacks: Counter,
}

impl FormatterMetrics {
    pub fn new<D: Document>(labels: &Labels) -> Self {
        let labels = document_labels::<D>(labels);
        FormatterMetrics {
            formatted: counter!("formatting.count", labels.clone()),
            fallbacks: counter!("formatting.fallback", labels),
        }
    }
}

#[derive(Clone)]
pub struct GeneratorMetrics {
    pub generated: Counter,
    /// Random fills thrown away because they produced a forbidden base
    pub retries: Counter,
}

impl GeneratorMetrics {
    pub fn new<D: Document>(labels: &Labels) -> Self {
        let labels = document_labels::<D>(labels);
        GeneratorMetrics {
            generated: counter!("generation.count", labels.clone()),
            retries: counter!("generation.retry", labels),
        }
    }
}

#[derive(Clone)]
pub struct ValidationMetrics {
    pub validated: Counter,
    pub invalid: Counter,
}

impl ValidationMetrics {
    pub fn new<D: Document>(labels: &Labels) -> Self {
        let labels = document_labels::<D>(labels);
        ValidationMetrics {
            validated: counter!("validation.count", labels.clone()),
            invalid: counter!("validation.invalid", labels),
        }
    }
}
