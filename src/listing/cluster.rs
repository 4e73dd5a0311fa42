//! URL-shape clusters and winner selection.

use std::collections::{HashMap, HashSet};

/// A cluster whose best anchor scores above this is trusted on its own.
const STRONG_CLUSTER_SCORE: i32 = 15;

/// Candidate URLs sharing one shape key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cluster {
    /// The shape key.
    pub shape: String,
    /// URLs in document order, duplicates included.
    pub urls: Vec<String>,
    /// Highest relevance score of any member.
    pub max_score: i32,
    /// Number of anchors assigned.
    pub count: usize,
}

/// Which rule picked the winning URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClusterChoice {
    /// The best-scored cluster is also the largest.
    Unanimous,
    /// Best and largest clusters tie on score; the largest wins.
    LargestOnTie,
    /// The largest cluster is strong too; both are merged.
    Merged,
    /// Only the best-scored cluster is strong.
    BestScored,
    /// Neither is strong; the largest wins.
    Largest,
}

/// Clusters built during one classification pass, in first-seen order.
#[derive(Debug, Default)]
pub struct ClusterSet {
    clusters: Vec<Cluster>,
    index: HashMap<String, usize>,
    titles: HashMap<String, String>,
    scores: HashMap<String, i32>,
}

impl ClusterSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one candidate anchor.
    pub fn add(&mut self, shape: String, url: String, score: i32, title: String) {
        let idx = match self.index.get(&shape) {
            Some(&idx) => idx,
            None => {
                self.clusters.push(Cluster {
                    shape: shape.clone(),
                    urls: Vec::new(),
                    max_score: score,
                    count: 0,
                });
                self.index.insert(shape, self.clusters.len() - 1);
                self.clusters.len() - 1
            }
        };

        let cluster = &mut self.clusters[idx];
        cluster.urls.push(url.clone());
        cluster.max_score = cluster.max_score.max(score);
        cluster.count += 1;

        let best = self.scores.entry(url.clone()).or_insert(score);
        *best = (*best).max(score);

        match self.titles.get_mut(&url) {
            Some(existing) if existing.chars().count() >= title.chars().count() => {}
            Some(existing) => *existing = title,
            None => {
                self.titles.insert(url, title);
            }
        }
    }

    /// All clusters in first-seen order.
    #[must_use]
    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    /// Longest title recorded for `url`.
    #[must_use]
    pub fn title(&self, url: &str) -> Option<&str> {
        self.titles.get(url).map(String::as_str)
    }

    /// Best relevance score recorded for `url`.
    #[must_use]
    pub fn score(&self, url: &str) -> Option<i32> {
        self.scores.get(url).copied()
    }

    /// Pick the winning URLs, deduplicated in first-seen order.
    ///
    /// Returns `None` when no candidate was recorded.
    #[must_use]
    pub fn select(&self) -> Option<(ClusterChoice, Vec<String>)> {
        let best = index_of_max(&self.clusters, |c| c.max_score)?;
        let largest = index_of_max(&self.clusters, |c| c.count)?;
        let (s, l) = (&self.clusters[best], &self.clusters[largest]);

        let (selection, urls): (ClusterChoice, Vec<&String>) = if best == largest {
            (ClusterChoice::Unanimous, s.urls.iter().collect())
        } else if s.max_score == l.max_score {
            (ClusterChoice::LargestOnTie, l.urls.iter().collect())
        } else if l.max_score > STRONG_CLUSTER_SCORE {
            (ClusterChoice::Merged, s.urls.iter().chain(&l.urls).collect())
        } else if s.max_score > STRONG_CLUSTER_SCORE {
            (ClusterChoice::BestScored, s.urls.iter().collect())
        } else {
            (ClusterChoice::Largest, l.urls.iter().collect())
        };

        log::debug!(
            "list clusters: best {:?} (score {}, {} items), largest {:?} (score {}, {} items) -> {:?}",
            s.shape,
            s.max_score,
            s.count,
            l.shape,
            l.max_score,
            l.count,
            selection
        );

        Some((selection, dedup(urls)))
    }
}

/// Index of the first element with the highest key.
fn index_of_max<T, K: Ord>(items: &[T], key: impl Fn(&T) -> K) -> Option<usize> {
    let mut best: Option<(usize, K)> = None;
    for (i, item) in items.iter().enumerate() {
        let k = key(item);
        if best.as_ref().is_none_or(|(_, b)| k > *b) {
            best = Some((i, k));
        }
    }
    best.map(|(i, _)| i)
}

/// Remove duplicates, keeping the first occurrence.
pub(crate) fn dedup<S: AsRef<str>>(items: impl IntoIterator<Item = S>) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter_map(|item| {
            let item = item.as_ref();
            seen.insert(item.to_string()).then(|| item.to_string())
        })
        .collect()
}
