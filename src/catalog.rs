// Built-in choices offered by wizard steps 2 and 3

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TravelMood {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItineraryTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub duration: &'static str,
    pub highlights: &'static [&'static str],
    pub icon: &'static str,
    pub is_featured: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Background {
    pub id: &'static str,
    pub uri: &'static str,
    pub name: &'static str,
}

pub const TRAVEL_MOODS: &[TravelMood] = &[
    TravelMood { id: "relaxing", name: "Relaxante", icon: "🏖️", description: "Descanso e tranquilidade", color: "#68c7d1" },
    TravelMood { id: "adventure", name: "Aventura", icon: "🏔️", description: "Adrenalina e emoção", color: "#ff6a32" },
    TravelMood { id: "cultural", name: "Cultural", icon: "🏛️", description: "História e conhecimento", color: "#1238b4" },
    TravelMood { id: "gastronomic", name: "Gastronômico", icon: "🍽️", description: "Sabores locais", color: "#ff6a32" },
    TravelMood { id: "romantic", name: "Romântico", icon: "💑", description: "Momentos a dois", color: "#1238b4" },
    TravelMood { id: "family", name: "Família", icon: "👨‍👩‍👧‍👦", description: "Para toda família", color: "#68c7d1" },
];

pub const DEFAULT_TEMPLATE_ID: &str = "custom";

pub const ITINERARY_TEMPLATES: &[ItineraryTemplate] = &[
    ItineraryTemplate {
        id: DEFAULT_TEMPLATE_ID,
        name: "Roteiro Personalizado",
        description: "Crie seu próprio roteiro do zero com base em suas preferências",
        duration: "Flexível",
        highlights: &["Total controle", "IA assistente", "Sugestões personalizadas"],
        icon: "✨",
        is_featured: true,
    },
    ItineraryTemplate {
        id: "beach-lover",
        name: "Praias Paradisíacas",
        description: "Tour pelas melhores praias da região",
        duration: "5-7 dias",
        highlights: &["Praias selvagens", "Águas cristalinas", "Pôr do sol"],
        icon: "🌊",
        is_featured: false,
    },
    ItineraryTemplate {
        id: "culture-immersion",
        name: "Imersão Cultural",
        description: "Conheça a história e tradições locais",
        duration: "3-5 dias",
        highlights: &["Museus", "Centros históricos", "Artesanato"],
        icon: "🎭",
        is_featured: false,
    },
    ItineraryTemplate {
        id: "gastro-tour",
        name: "Tour Gastronômico",
        description: "Saboreie a culinária típica da região",
        duration: "4-6 dias",
        highlights: &["Restaurantes locais", "Feiras", "Aulas de culinária"],
        icon: "🍴",
        is_featured: false,
    },
    ItineraryTemplate {
        id: "adventure-pack",
        name: "Pacote Aventura",
        description: "Experiências radicais e natureza",
        duration: "5-7 dias",
        highlights: &["Trilhas", "Esportes", "Ecoturismo"],
        icon: "🎢",
        is_featured: false,
    },
    ItineraryTemplate {
        id: "weekend-express",
        name: "Final de Semana Express",
        description: "Roteiro compacto para 2-3 dias",
        duration: "2-3 dias",
        highlights: &["Principais pontos", "Otimizado", "Rápido"],
        icon: "⚡",
        is_featured: false,
    },
];

pub const DEFAULT_BACKGROUNDS: &[Background] = &[
    Background { id: "beach", uri: "https://images.unsplash.com/photo-1507525428034-b723cf961d3e?w=400", name: "Praia" },
    Background { id: "mountain", uri: "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=400", name: "Montanha" },
    Background { id: "city", uri: "https://images.unsplash.com/photo-1514565131-fce0801e5785?w=400", name: "Cidade" },
    Background { id: "nature", uri: "https://images.unsplash.com/photo-1441974231531-c6227db76b6e?w=400", name: "Natureza" },
    Background { id: "sunset", uri: "https://images.unsplash.com/photo-1495567720989-cebdbdd97913?w=400", name: "Pôr do sol" },
    Background { id: "tropical", uri: "https://images.unsplash.com/photo-1559827260-dc66d52bef19?w=400", name: "Tropical" },
];

pub fn find_mood(id: &str) -> Option<&'static TravelMood> {
    TRAVEL_MOODS.iter().find(|mood| mood.id == id)
}

pub fn find_template(id: &str) -> Option<&'static ItineraryTemplate> {
    ITINERARY_TEMPLATES.iter().find(|template| template.id == id)
}

pub fn default_background() -> &'static Background {
    &DEFAULT_BACKGROUNDS[0]
}
