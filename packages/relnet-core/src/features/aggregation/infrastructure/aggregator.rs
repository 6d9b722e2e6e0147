//! Observation → unit aggregation and top-K selection

use ahash::{AHashMap, AHashSet};
use tracing::debug;

use crate::features::aggregation::domain::{AggregatedTerm, TermKey, TermObservation, UnitTerms};

/// Running sums for one (unit, term)
#[derive(Debug)]
struct Accumulator {
    text: String,
    label: String,
    total_frequency: i64,
    score_sum: f64,
    count: usize,
    documents: AHashSet<i64>,
    language: Option<String>,
}

impl Accumulator {
    fn new(obs: &TermObservation) -> Self {
        Self {
            text: obs.text.clone(),
            label: obs.label.clone(),
            total_frequency: 0,
            score_sum: 0.0,
            count: 0,
            documents: AHashSet::new(),
            language: None,
        }
    }

    fn push(&mut self, obs: &TermObservation) {
        self.total_frequency += obs.frequency;
        self.score_sum += obs.score;
        self.count += 1;
        self.documents.insert(obs.document);
        if self.language.is_none() {
            self.language = obs.language.clone().filter(|l| !l.is_empty());
        }
    }

    fn finish(self) -> AggregatedTerm {
        AggregatedTerm {
            text: self.text,
            label: self.label,
            total_frequency: self.total_frequency,
            avg_score: if self.count == 0 {
                0.0
            } else {
                self.score_sum / self.count as f64
            },
            doc_count: self.documents.len(),
            language: self.language,
        }
    }
}

#[derive(Debug, Default)]
struct UnitAccumulator {
    unit: String,
    terms: Vec<Accumulator>,
    index: AHashMap<TermKey, usize>,
}

/// Groups observations by unit, then by `(text, label)`
///
/// Units and terms come out in first-seen order, which is the tie-break for
/// equal composite scores.
#[derive(Debug, Default)]
pub struct DomainAggregator {
    units: Vec<UnitAccumulator>,
    index: AHashMap<String, usize>,
    observations: usize,
}

impl DomainAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, obs: &TermObservation) {
        let unit_pos = match self.index.get(&obs.unit) {
            Some(&pos) => pos,
            None => {
                self.units.push(UnitAccumulator {
                    unit: obs.unit.clone(),
                    ..UnitAccumulator::default()
                });
                self.index.insert(obs.unit.clone(), self.units.len() - 1);
                self.units.len() - 1
            }
        };

        let unit = &mut self.units[unit_pos];
        let key = obs.key();
        let term_pos = match unit.index.get(&key) {
            Some(&pos) => pos,
            None => {
                unit.terms.push(Accumulator::new(obs));
                unit.index.insert(key, unit.terms.len() - 1);
                unit.terms.len() - 1
            }
        };
        unit.terms[term_pos].push(obs);
        self.observations += 1;
    }

    pub fn extend<'a>(&mut self, observations: impl IntoIterator<Item = &'a TermObservation>) {
        for obs in observations {
            self.push(obs);
        }
    }

    pub fn finish(self) -> Vec<UnitTerms> {
        debug!(
            units = self.units.len(),
            observations = self.observations,
            "aggregated term observations"
        );
        self.units
            .into_iter()
            .map(|u| UnitTerms {
                unit: u.unit,
                terms: u.terms.into_iter().map(Accumulator::finish).collect(),
            })
            .collect()
    }

    /// One-shot aggregation
    pub fn aggregate(observations: &[TermObservation]) -> Vec<UnitTerms> {
        let mut agg = Self::new();
        agg.extend(observations);
        agg.finish()
    }
}

/// Top-K by composite score, then the cutoff on that slice only
///
/// The sort is stable, so equal composites keep first-seen order. Terms past
/// K are dropped before `min_score` is applied and never come back, even if
/// they would pass the cutoff.
pub fn select_top_k(
    mut terms: Vec<AggregatedTerm>,
    top_k: Option<usize>,
    min_score: Option<f64>,
) -> Vec<AggregatedTerm> {
    terms.sort_by(|a, b| b.composite().total_cmp(&a.composite()));
    if let Some(k) = top_k {
        terms.truncate(k);
    }
    if let Some(min) = min_score {
        terms.retain(|t| t.avg_score >= min);
    }
    terms
}
