// Static state/city reference data used to pick and validate the destination

use serde::{Deserialize, Serialize};

use crate::error::LookupError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    pub id: String,
    pub name: String,
    pub uf: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    pub id: String,
    pub name: String,
    pub state_id: String,
}

fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

// Read-only lookup over a state/city table. Implementors only provide the
// table; matching lives in the provided methods.
pub trait LocationDirectory {
    fn states(&self) -> &[State];

    fn cities(&self) -> &[City];

    fn list_states(&self) -> Vec<&State> {
        self.states().iter().collect()
    }

    fn cities_of(&self, state_id: &str) -> Vec<&City> {
        self.cities()
            .iter()
            .filter(|city| city.state_id == state_id)
            .collect()
    }

    fn state_by_id(&self, state_id: &str) -> Option<&State> {
        self.states().iter().find(|state| state.id == state_id)
    }

    // Exact match on full name or UF, ignoring case and surrounding blanks
    fn find_state_by_name(&self, name: &str) -> Option<&State> {
        let wanted = normalize(name);
        self.states()
            .iter()
            .find(|state| normalize(&state.name) == wanted || normalize(&state.uf) == wanted)
    }

    fn find_city_in_state(&self, name: &str, state_id: &str) -> Option<&City> {
        let wanted = normalize(name);
        self.cities()
            .iter()
            .find(|city| city.state_id == state_id && normalize(&city.name) == wanted)
    }

    // Substring search; a blank query matches nothing
    fn search_states(&self, query: &str) -> Vec<&State> {
        let query = normalize(query);
        if query.is_empty() {
            return Vec::new();
        }
        self.states()
            .iter()
            .filter(|state| {
                normalize(&state.name).contains(&query) || normalize(&state.uf).contains(&query)
            })
            .collect()
    }

    fn search_cities(&self, query: &str, state_id: Option<&str>) -> Vec<&City> {
        let query = normalize(query);
        if query.is_empty() {
            return Vec::new();
        }
        self.cities()
            .iter()
            .filter(|city| state_id.map_or(true, |id| city.state_id == id))
            .filter(|city| normalize(&city.name).contains(&query))
            .collect()
    }

    // Destination as typed by the user -> known state and one of its cities
    fn resolve_destination(&self, state: &str, city: &str) -> Result<(&State, &City), LookupError> {
        let found_state = self
            .find_state_by_name(state)
            .ok_or_else(|| LookupError::UnknownState(state.trim().to_string()))?;
        let found_city = self
            .find_city_in_state(city, &found_state.id)
            .ok_or_else(|| LookupError::CityNotInState {
                state: found_state.name.clone(),
                city: city.trim().to_string(),
            })?;
        Ok((found_state, found_city))
    }
}

#[derive(Debug, Clone)]
pub struct StaticLocationDirectory {
    states: Vec<State>,
    cities: Vec<City>,
}

impl StaticLocationDirectory {
    pub fn new(states: Vec<State>, cities: Vec<City>) -> Self {
        Self { states, cities }
    }

    // Destinations currently served by the app
    pub fn brazil() -> Self {
        let state = |id: &str, name: &str, uf: &str| State {
            id: id.to_string(),
            name: name.to_string(),
            uf: uf.to_string(),
        };
        let city = |id: &str, name: &str, state_id: &str| City {
            id: id.to_string(),
            name: name.to_string(),
            state_id: state_id.to_string(),
        };

        Self::new(
            vec![
                state("ce", "Ceará", "CE"),
                state("rs", "Rio Grande do Sul", "RS"),
            ],
            vec![
                city("fortaleza", "Fortaleza", "ce"),
                city("juazeiro-do-norte", "Juazeiro do Norte", "ce"),
                city("gramado", "Gramado", "rs"),
            ],
        )
    }
}

impl Default for StaticLocationDirectory {
    fn default() -> Self {
        Self::brazil()
    }
}

impl LocationDirectory for StaticLocationDirectory {
    fn states(&self) -> &[State] {
        &self.states
    }

    fn cities(&self) -> &[City] {
        &self.cities
    }
}
