//! Horaires d'ouverture hebdomadaires : producteurs de séquences pour
//! l'algèbre.
//!
//! Les décalages sont relatifs au lundi 00:00 de la semaine modélisée.

use crate::algebra::{normalize, sweep, tile, SlotError};
use crate::model::Slot;
use crate::offset::{hours, Offset};
use chrono::{TimeDelta, Weekday};

const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Options de génération d'une semaine type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekOptions {
    /// Heure d'ouverture, depuis minuit.
    pub open: Offset,
    pub duration: Offset,
    pub days: Vec<Weekday>,
}

impl Default for WeekOptions {
    fn default() -> Self {
        Self {
            open: hours(9),
            duration: hours(8),
            days: WEEK[..5].to_vec(),
        }
    }
}

/// Un créneau d'ouverture répété sur un ensemble de jours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessHours {
    daily: Slot,
    days: Vec<Weekday>,
}

impl BusinessHours {
    pub fn new(opts: WeekOptions) -> Result<Self, SlotError> {
        Ok(Self {
            daily: Slot::new(opts.open, opts.duration)?,
            days: opts.days,
        })
    }

    /// Ouvert du lundi au vendredi, fermé le week-end.
    pub fn weekdays(open: Offset, duration: Offset) -> Result<Self, SlotError> {
        Self::new(WeekOptions {
            open,
            duration,
            ..WeekOptions::default()
        })
    }

    pub fn is_open_on(&self, day: Weekday) -> bool {
        self.days.contains(&day)
    }

    /// Créneaux du jour `day`, relatifs à son minuit.
    pub fn for_day(&self, day: Weekday) -> Vec<Slot> {
        if self.is_open_on(day) && !self.daily.is_empty() {
            vec![self.daily]
        } else {
            Vec::new()
        }
    }

    /// Table de la semaine, canonique. Un horaire qui passe minuit déborde
    /// sur le jour suivant et fusionne avec lui s'il le touche.
    pub fn week(&self) -> Vec<Slot> {
        let table = WEEK
            .iter()
            .flat_map(|day| {
                let shift = TimeDelta::days(i64::from(day.num_days_from_monday()));
                self.for_day(*day)
                    .into_iter()
                    .map(move |slot| slot.move_forward(shift))
            })
            .collect();
        normalize(table)
    }

    /// Temps ouvert de la semaine, pauses déduites. Les pauses peuvent être
    /// fournies dans le désordre.
    pub fn open_time(&self, breaks: &[Slot]) -> Vec<Slot> {
        let breaks = normalize(breaks.to_vec());
        let open = sweep::difference(&self.week(), &breaks);

        #[cfg(feature = "logging")]
        tracing::debug!(breaks = breaks.len(), open = open.len(), "week open time");
        open
    }
}

/// Rendez-vous de durée exacte `length` dans chaque créneau ouvert ; les
/// fins de créneau trop courtes sont perdues.
pub fn bookable(open: &[Slot], length: Offset) -> Result<Vec<Slot>, SlotError> {
    if length <= TimeDelta::zero() {
        return Err(SlotError::InvalidLength(length));
    }
    let mut out = Vec::new();
    for slot in open {
        out.extend(tile(*slot, length)?);
    }
    Ok(out)
}
