// Itinerary draft carried explicitly across the three wizard steps.
// Each step consumes the draft and hands back an updated one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::{default_background, find_mood, find_template, DEFAULT_TEMPLATE_ID};
use crate::error::{FormField, Reason, ValidationError, WizardError};
use crate::wire::Step1Data;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step2Data {
    pub moods: Vec<String>,
    pub template: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step3Data {
    pub name: String,
    pub description: String,
    pub background_image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItineraryDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step1: Option<Step1Data>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step2: Option<Step2Data>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step3: Option<Step3Data>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedItinerary {
    pub step1: Step1Data,
    pub step2: Step2Data,
    pub step3: Step3Data,
    pub created_at: DateTime<Utc>,
}

impl ItineraryDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_step1(mut self, data: Step1Data) -> Self {
        self.step1 = Some(data);
        self
    }

    pub fn with_step2(mut self, data: Step2Data) -> Self {
        self.step2 = Some(data);
        self
    }

    pub fn with_step3(mut self, data: Step3Data) -> Self {
        self.step3 = Some(data);
        self
    }

    // Abandoning the flow: nothing was persisted, so just drop everything
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn finish(self, created_at: DateTime<Utc>) -> Result<CompletedItinerary, WizardError> {
        let step1 = self
            .step1
            .ok_or_else(|| ValidationError::required(FormField::Step(1)))?;
        let step2 = self
            .step2
            .ok_or_else(|| ValidationError::required(FormField::Step(2)))?;
        let step3 = self
            .step3
            .ok_or_else(|| ValidationError::required(FormField::Step(3)))?;

        tracing::debug!(name = %step3.name, stays = step1.accommodations.len(), "itinerary completed");
        Ok(CompletedItinerary {
            step1,
            step2,
            step3,
            created_at,
        })
    }
}

// Step 2: travel moods and itinerary template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodForm {
    moods: Vec<String>,
    template: String,
}

impl Default for MoodForm {
    fn default() -> Self {
        Self {
            moods: Vec::new(),
            template: DEFAULT_TEMPLATE_ID.to_string(),
        }
    }
}

impl MoodForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn moods(&self) -> &[String] {
        &self.moods
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    // Selected moods keep the order they were picked in
    pub fn toggle_mood(&mut self, mood_id: &str) {
        if let Some(position) = self.moods.iter().position(|id| id == mood_id) {
            self.moods.remove(position);
        } else {
            self.moods.push(mood_id.to_string());
        }
    }

    pub fn select_template(&mut self, template_id: &str) {
        self.template = template_id.to_string();
    }

    pub fn validate(&self) -> Result<Step2Data, ValidationError> {
        if self.moods.is_empty() {
            return Err(ValidationError::new(FormField::Moods, Reason::NoMoodSelected));
        }
        if let Some(unknown) = self.moods.iter().find(|id| find_mood(id).is_none()) {
            return Err(ValidationError::new(
                FormField::Moods,
                Reason::UnknownMood(unknown.clone()),
            ));
        }
        if find_template(&self.template).is_none() {
            return Err(ValidationError::new(
                FormField::Template,
                Reason::UnknownTemplate(self.template.clone()),
            ));
        }

        Ok(Step2Data {
            moods: self.moods.clone(),
            template: self.template.clone(),
        })
    }

    pub fn continue_to_next(&self, draft: ItineraryDraft) -> Result<ItineraryDraft, WizardError> {
        let data = self.validate()?;
        Ok(draft.with_step2(data))
    }
}

// Step 3: name, description and cover image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleForm {
    pub name: String,
    pub description: String,
    pub background_image: Option<String>,
}

impl Default for StyleForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            background_image: Some(default_background().uri.to_string()),
        }
    }
}

impl StyleForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> Result<Step3Data, ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::required(FormField::Name));
        }
        Ok(Step3Data {
            name: self.name.clone(),
            description: self.description.clone(),
            background_image: self.background_image.clone(),
        })
    }

    pub fn finish(
        &self,
        draft: ItineraryDraft,
        created_at: DateTime<Utc>,
    ) -> Result<CompletedItinerary, WizardError> {
        let data = self.validate()?;
        draft.with_step3(data).finish(created_at)
    }
}
