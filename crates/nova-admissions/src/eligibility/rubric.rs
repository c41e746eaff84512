use serde::Serialize;

use super::domain::{GermanLevel, QualificationLevel, WorkExperience};

pub const ACADEMIC_MAX: u8 = 40;
pub const ENGLISH_MAX: u8 = 25;
pub const GERMAN_MAX: u8 = 20;
pub const WORK_EXPERIENCE_MAX: u8 = 15;
pub const TOTAL_MAX: u8 = 100;

/// Readiness at or above this is eligible for public universities.
pub const PUBLIC_THRESHOLD: u8 = 80;
/// Readiness at or above this (and below public) is eligible for private universities.
pub const PRIVATE_THRESHOLD: u8 = 60;

/// Sub-scores below this share of their maximum earn a recommendation.
pub const RECOMMENDATION_FRACTION: f64 = 0.7;

/// CGPA on a 10-point scale is multiplied by this to reach a percentage basis.
pub const CGPA_TO_PERCENTAGE: f64 = 10.0;

/// Lower bound (inclusive) of a score band and the points it awards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Band {
    pub min: f64,
    pub points: u8,
}

const fn band(min: f64, points: u8) -> Band {
    Band { min, points }
}

/// Bands over the normalized (0-100) academic score, highest first.
pub const ACADEMIC_BANDS: &[Band] = &[
    band(85.0, 32),
    band(75.0, 28),
    band(65.0, 22),
    band(55.0, 16),
    band(50.0, 10),
    band(0.0, 4),
];

/// Indexed by [`QualificationLevel::ordinal`].
pub const QUALIFICATION_POINTS: [u8; 5] = [0, 2, 6, 8, 8];

pub const IELTS_BANDS: &[Band] = &[
    band(7.0, 25),
    band(6.5, 21),
    band(6.0, 15),
    band(5.5, 10),
    band(0.0, 5),
];

pub const TOEFL_BANDS: &[Band] = &[
    band(100.0, 25),
    band(90.0, 21),
    band(80.0, 15),
    band(70.0, 10),
    band(0.0, 5),
];

/// Registered but not yet taken.
pub const ENGLISH_PENDING_POINTS: u8 = 8;
pub const ENGLISH_NONE_POINTS: u8 = 0;

/// Indexed by [`GermanLevel::ordinal`].
pub const GERMAN_POINTS: [u8; 7] = [0, 4, 7, 11, 15, 18, 20];

/// Indexed by [`WorkExperience::ordinal`].
pub const WORK_EXPERIENCE_POINTS: [u8; 4] = [0, 5, 10, 15];

/// Point tables and cut-points used by the scorer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoringRubric {
    pub academic_max: u8,
    pub english_max: u8,
    pub german_max: u8,
    pub work_experience_max: u8,
    pub public_threshold: u8,
    pub private_threshold: u8,
    pub recommendation_fraction: f64,
    pub cgpa_to_percentage: f64,
    pub academic_bands: &'static [Band],
    pub qualification_points: [u8; 5],
    pub ielts_bands: &'static [Band],
    pub toefl_bands: &'static [Band],
    pub english_pending_points: u8,
    pub english_none_points: u8,
    pub german_points: [u8; 7],
    pub work_experience_points: [u8; 4],
}

impl ScoringRubric {
    pub const STANDARD: ScoringRubric = ScoringRubric {
        academic_max: ACADEMIC_MAX,
        english_max: ENGLISH_MAX,
        german_max: GERMAN_MAX,
        work_experience_max: WORK_EXPERIENCE_MAX,
        public_threshold: PUBLIC_THRESHOLD,
        private_threshold: PRIVATE_THRESHOLD,
        recommendation_fraction: RECOMMENDATION_FRACTION,
        cgpa_to_percentage: CGPA_TO_PERCENTAGE,
        academic_bands: ACADEMIC_BANDS,
        qualification_points: QUALIFICATION_POINTS,
        ielts_bands: IELTS_BANDS,
        toefl_bands: TOEFL_BANDS,
        english_pending_points: ENGLISH_PENDING_POINTS,
        english_none_points: ENGLISH_NONE_POINTS,
        german_points: GERMAN_POINTS,
        work_experience_points: WORK_EXPERIENCE_POINTS,
    };

    pub fn total_max(&self) -> u16 {
        u16::from(self.academic_max)
            + u16::from(self.english_max)
            + u16::from(self.german_max)
            + u16::from(self.work_experience_max)
    }

    pub fn qualification_points(&self, level: QualificationLevel) -> u8 {
        self.qualification_points[level.ordinal()]
    }

    pub fn german_points(&self, level: GermanLevel) -> u8 {
        self.german_points[level.ordinal()]
    }

    pub fn work_experience_points(&self, experience: WorkExperience) -> u8 {
        self.work_experience_points[experience.ordinal()]
    }

    /// Check that maxima sum to 100, every table is monotonic and reaches its maximum,
    /// and the tier cut-points partition 0-100.
    pub fn validate(&self) -> Result<(), RubricError> {
        let total = self.total_max();
        if total != u16::from(TOTAL_MAX) {
            return Err(RubricError::WeightsDoNotSum(total));
        }

        check_bands("academic", self.academic_bands)?;
        check_steps("qualification", &self.qualification_points)?;
        let academic_top = band_top(self.academic_bands) + u16::from(max_of(&self.qualification_points));
        check_reaches("academic", academic_top, self.academic_max)?;

        check_bands("ielts", self.ielts_bands)?;
        check_bands("toefl", self.toefl_bands)?;
        check_reaches("ielts", band_top(self.ielts_bands), self.english_max)?;
        check_reaches("toefl", band_top(self.toefl_bands), self.english_max)?;
        if self.english_pending_points > self.english_max
            || self.english_none_points > self.english_pending_points
        {
            return Err(RubricError::NotMonotonic("english status"));
        }

        check_steps("german", &self.german_points)?;
        check_reaches("german", u16::from(max_of(&self.german_points)), self.german_max)?;
        check_steps("work experience", &self.work_experience_points)?;
        check_reaches(
            "work experience",
            u16::from(max_of(&self.work_experience_points)),
            self.work_experience_max,
        )?;

        if self.private_threshold == 0
            || self.private_threshold >= self.public_threshold
            || self.public_threshold > TOTAL_MAX
        {
            return Err(RubricError::Thresholds {
                public: self.public_threshold,
                private: self.private_threshold,
            });
        }

        if !(self.recommendation_fraction > 0.0 && self.recommendation_fraction <= 1.0) {
            return Err(RubricError::RecommendationFraction(
                self.recommendation_fraction,
            ));
        }

        if !(self.cgpa_to_percentage > 0.0 && self.cgpa_to_percentage <= 10.0) {
            return Err(RubricError::CgpaScale(self.cgpa_to_percentage));
        }

        Ok(())
    }
}

impl Default for ScoringRubric {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Rubric defects detected by [`ScoringRubric::validate`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RubricError {
    #[error("sub-score maxima sum to {0}, expected 100")]
    WeightsDoNotSum(u16),
    #[error("{0} table is not monotonic")]
    NotMonotonic(&'static str),
    #[error("{0} bands must end with a band starting at 0")]
    UncoveredBands(&'static str),
    #[error("{table} table tops out at {top}, expected {max}")]
    MaximumMismatch {
        table: &'static str,
        top: u16,
        max: u8,
    },
    #[error("tier thresholds public={public} private={private} do not partition 0-100")]
    Thresholds { public: u8, private: u8 },
    #[error("recommendation fraction {0} must lie in (0, 1]")]
    RecommendationFraction(f64),
    #[error("CGPA scale {0} must lie in (0, 10]")]
    CgpaScale(f64),
}

/// Points for the first band whose lower bound `value` reaches.
pub(crate) fn band_points(bands: &[Band], value: f64) -> u8 {
    bands
        .iter()
        .find(|band| value >= band.min)
        .map(|band| band.points)
        .unwrap_or(0)
}

fn band_top(bands: &[Band]) -> u16 {
    bands.first().map(|band| u16::from(band.points)).unwrap_or(0)
}

fn max_of(points: &[u8]) -> u8 {
    points.iter().copied().max().unwrap_or(0)
}

fn check_bands(table: &'static str, bands: &[Band]) -> Result<(), RubricError> {
    let ordered = bands
        .windows(2)
        .all(|pair| pair[0].min > pair[1].min && pair[0].points >= pair[1].points);
    if !ordered {
        return Err(RubricError::NotMonotonic(table));
    }
    match bands.last() {
        Some(last) if last.min <= 0.0 => Ok(()),
        _ => Err(RubricError::UncoveredBands(table)),
    }
}

fn check_steps(table: &'static str, points: &[u8]) -> Result<(), RubricError> {
    if points.windows(2).all(|pair| pair[0] <= pair[1]) {
        Ok(())
    } else {
        Err(RubricError::NotMonotonic(table))
    }
}

fn check_reaches(table: &'static str, top: u16, max: u8) -> Result<(), RubricError> {
    if top == u16::from(max) {
        Ok(())
    } else {
        Err(RubricError::MaximumMismatch { table, top, max })
    }
}
