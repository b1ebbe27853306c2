// SPDX-FileCopyrightText: 2026 Arturo Morgadanes Fontanería
// SPDX-License-Identifier: Apache-2.0

//! Flat content model for the website: business metadata, the service and
//! city catalogs, and customer testimonials.
//!
//! Wire shapes (camelCase field names) match what the site's front end has
//! always consumed. Business metadata and testimonials are editable through
//! the admin API for the lifetime of the process; services and cities are a
//! static catalog.

use serde::{Deserialize, Serialize};

/// Business metadata shown across the site and used as the notification
/// recipient.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Business {
    pub name: String,
    pub title: String,
    pub tagline: String,
    pub url: String,
    pub phone: String,
    pub whatsapp: String,
    pub email: String,
    pub address: String,
    pub hours: Hours,
    pub experience_years: u32,
    pub jobs_completed: u32,
    pub google_review_score: f32,
    pub google_review_count: u32,
    pub certifications: Vec<String>,
    pub service_radius: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hours {
    pub weekdays: String,
    pub saturday: String,
    pub sunday: String,
}

/// A plumbing service offered, with a markdown description rendered by
/// [`crate::markdown`] on the detail endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub slug: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_en: Option<String>,
    pub short_description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description_en: Option<String>,
    pub description: String,
    pub price_range: String,
    pub duration: String,
    pub icon: String,
    #[serde(default)]
    pub is_emergency: bool,
    pub faqs: Vec<Faq>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

/// A city in the service area, with markdown local content.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    pub slug: String,
    pub name: String,
    pub province: String,
    pub postal_codes: Vec<String>,
    pub response_time: String,
    pub local_content: String,
    pub nearby_areas: Vec<String>,
}

/// A customer review. The list is kept newest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub name: String,
    pub location: String,
    pub service: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_en: Option<String>,
    pub rating: u8,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_en: Option<String>,
    /// Format: YYYY-MM
    pub date: String,
}

/// All site content, held in the application state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteContent {
    pub business: Business,
    pub services: Vec<Service>,
    pub cities: Vec<City>,
    pub testimonials: Vec<Testimonial>,
}

impl SiteContent {
    /// The content the process starts with.
    pub fn seed() -> Self {
        Self {
            business: seed_business(),
            services: seed_services(),
            cities: seed_cities(),
            testimonials: seed_testimonials(),
        }
    }

    pub fn service_by_slug(&self, slug: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.slug == slug)
    }

    pub fn city_by_slug(&self, slug: &str) -> Option<&City> {
        self.cities.iter().find(|c| c.slug == slug)
    }
}

fn seed_business() -> Business {
    Business {
        name: "Arturo Morgadanes".to_string(),
        title: "Fontanero Profesional".to_string(),
        tagline: "Fontanero de confianza en Vigo y alrededores".to_string(),
        url: "https://arturomorgadanes.es".to_string(),
        phone: "+34 608 022 766".to_string(),
        whatsapp: "34666123456".to_string(),
        email: "info@arturomorgadanes.es".to_string(),
        address: "Vigo, Pontevedra, Galicia".to_string(),
        hours: Hours {
            weekdays: "08:00 - 20:00".to_string(),
            saturday: "09:00 - 14:00".to_string(),
            sunday: "Urgencias 24h".to_string(),
        },
        experience_years: 15,
        jobs_completed: 2000,
        google_review_score: 4.9,
        google_review_count: 127,
        certifications: vec![
            "Carnet de instalador autorizado".to_string(),
            "Seguro de responsabilidad civil".to_string(),
        ],
        service_radius: "30 km desde Vigo".to_string(),
    }
}

fn seed_services() -> Vec<Service> {
    vec![
        Service {
            slug: "desatascos".to_string(),
            name: "Desatascos".to_string(),
            name_en: Some("Drain Cleaning".to_string()),
            short_description:
                "Limpieza y desatasco de tuberías, desagües y arquetas con equipos profesionales."
                    .to_string(),
            short_description_en: Some(
                "Professional cleaning and unblocking of pipes, drains, and manholes.".to_string(),
            ),
            description: "## Servicio Profesional de Desatascos en Gondomar\n\nOfrezco un servicio profesional de desatascos en Gondomar y alrededores. Utilizo equipos de alta presión y cámaras de inspección para localizar y eliminar cualquier obstrucción en sus tuberías de forma rápida y efectiva.\n\n### ¿Qué incluye el servicio?\n\n- **Diagnóstico inicial** con cámara de inspección para localizar exactamente el problema\n- **Desatasco con máquina de alta presión** para eliminar cualquier obstrucción\n- **Limpieza completa** de la tubería afectada\n- **Comprobación final** del correcto funcionamiento del desagüe".to_string(),
            price_range: "60€ - 150€".to_string(),
            duration: "1-2 horas".to_string(),
            icon: "Droplets".to_string(),
            is_emergency: false,
            faqs: vec![Faq {
                question: "¿Cuánto tarda un desatasco?".to_string(),
                answer: "La mayoría de los desatascos se resuelven en una o dos horas, según la gravedad de la obstrucción.".to_string(),
            }],
        },
        Service {
            slug: "reparacion-fugas".to_string(),
            name: "Reparación de Fugas".to_string(),
            name_en: Some("Leak Repair".to_string()),
            short_description:
                "Localización y reparación de fugas de agua en tuberías, grifos y cisternas."
                    .to_string(),
            short_description_en: Some(
                "Location and repair of water leaks in pipes, faucets and cisterns.".to_string(),
            ),
            description: "## Reparación de Fugas de Agua\n\nLocalizo fugas sin necesidad de levantar toda la instalación, con equipos de detección acústica y térmica.\n\n### ¿Qué incluye el servicio?\n\n- **Localización exacta** de la fuga con equipos de detección\n- **Reparación** de la tubería o elemento afectado\n- **Comprobación de presión** de toda la instalación".to_string(),
            price_range: "40€ - 200€".to_string(),
            duration: "1-3 horas".to_string(),
            icon: "Wrench".to_string(),
            is_emergency: false,
            faqs: vec![Faq {
                question: "¿Hay que romper la pared para encontrar la fuga?".to_string(),
                answer: "Normalmente no. Los equipos de detección localizan la fuga y solo se abre el punto exacto de la reparación.".to_string(),
            }],
        },
        Service {
            slug: "cambio-calentador".to_string(),
            name: "Cambio de Calentador".to_string(),
            name_en: Some("Water Heater Replacement".to_string()),
            short_description:
                "Sustitución e instalación de calentadores y termos eléctricos o de gas."
                    .to_string(),
            short_description_en: Some(
                "Replacement and installation of electric or gas water heaters.".to_string(),
            ),
            description: "## Cambio e Instalación de Calentadores\n\nSustituyo su calentador antiguo por uno nuevo, normalmente el mismo día.\n\n- **Retirada del equipo antiguo** incluida\n- **Instalación y puesta en marcha** del equipo nuevo\n- Asesoramiento sobre el modelo adecuado para su vivienda".to_string(),
            price_range: "80€ - 250€".to_string(),
            duration: "2-4 horas".to_string(),
            icon: "Flame".to_string(),
            is_emergency: false,
            faqs: vec![],
        },
        Service {
            slug: "urgencias-24h".to_string(),
            name: "Urgencias 24h".to_string(),
            name_en: Some("24h Emergency".to_string()),
            short_description:
                "Atención urgente de fontanería las 24 horas, los 365 días del año.".to_string(),
            short_description_en: Some(
                "Urgent plumbing attention 24 hours a day, 365 days a year.".to_string(),
            ),
            description: "## Fontanero de Urgencias 24 Horas\n\nUna tubería rota o una fuga importante no esperan. Atiendo urgencias a cualquier hora en Vigo y alrededores.\n\n- **Llegada en 30-60 minutos** dentro de la zona de servicio\n- **Presupuesto cerrado** antes de empezar el trabajo".to_string(),
            price_range: "Desde 80€".to_string(),
            duration: "Llegada en 30-60 min".to_string(),
            icon: "Siren".to_string(),
            is_emergency: true,
            faqs: vec![Faq {
                question: "¿Atiende urgencias de noche y en festivos?".to_string(),
                answer: "Sí, el servicio de urgencias funciona las 24 horas todos los días del año.".to_string(),
            }],
        },
    ]
}

fn seed_cities() -> Vec<City> {
    vec![
        City {
            slug: "Gondomar".to_string(),
            name: "Gondomar".to_string(),
            province: "Pontevedra".to_string(),
            postal_codes: vec![
                "36201".to_string(),
                "36202".to_string(),
                "36203".to_string(),
                "36204".to_string(),
            ],
            response_time: "30 minutos".to_string(),
            local_content: "## Fontanero en Gondomar - Servicio Profesional\n\nSoy Arturo Morgadanes, fontanero profesional con más de 15 años de experiencia trabajando en Gondomar y su área metropolitana.\n\n### Zonas de Gondomar donde trabajo\n\n- Centro de Gondomar\n- Vincios\n- Donas".to_string(),
            nearby_areas: vec![
                "Vincios".to_string(),
                "Donas".to_string(),
                "Mañufe".to_string(),
            ],
        },
        City {
            slug: "pontevedra".to_string(),
            name: "Pontevedra".to_string(),
            province: "Pontevedra".to_string(),
            postal_codes: vec!["36001".to_string(), "36002".to_string(), "36003".to_string()],
            response_time: "45 minutos".to_string(),
            local_content: "## Fontanero en Pontevedra\n\nServicio de fontanería a domicilio en Pontevedra capital y alrededores, con desplazamiento el mismo día para la mayoría de los trabajos.".to_string(),
            nearby_areas: vec!["Marín".to_string(), "Poio".to_string()],
        },
        City {
            slug: "nigran".to_string(),
            name: "Nigrán".to_string(),
            province: "Pontevedra".to_string(),
            postal_codes: vec!["36350".to_string()],
            response_time: "25 minutos".to_string(),
            local_content: "## Fontanero en Nigrán\n\nAtiendo todo el municipio de Nigrán, incluida la zona de playa, con tiempos de respuesta muy cortos.".to_string(),
            nearby_areas: vec!["Panxón".to_string(), "A Ramallosa".to_string()],
        },
    ]
}

fn seed_testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            name: "María García".to_string(),
            location: "Gondomar".to_string(),
            service: "Desatascos".to_string(),
            service_en: Some("Drain Cleaning".to_string()),
            rating: 5,
            text: "Llegó en menos de una hora y solucionó el atasco del baño rápidamente. Muy profesional y buen precio. Lo recomiendo sin duda.".to_string(),
            text_en: Some("Arrived in less than an hour and quickly fixed the bathroom clog. Very professional and good price. I definitely recommend him.".to_string()),
            date: "2024-11".to_string(),
        },
        Testimonial {
            name: "Carlos Rodríguez".to_string(),
            location: "Pontevedra".to_string(),
            service: "Cambio de calentador".to_string(),
            service_en: Some("Water Heater Replacement".to_string()),
            rating: 5,
            text: "Me instaló el termo nuevo el mismo día que le llamé. Trabajo limpio y ordenado. Muy contento con el resultado.".to_string(),
            text_en: Some("He installed the new water heater the same day I called. Clean and tidy work. Very happy with the result.".to_string()),
            date: "2024-10".to_string(),
        },
        Testimonial {
            name: "Ana Fernández".to_string(),
            location: "Nigrán".to_string(),
            service: "Reparación de fugas".to_string(),
            service_en: Some("Leak Repair".to_string()),
            rating: 5,
            text: "Tenía una fuga en la cocina que no encontraba nadie. Arturo la localizó en 10 minutos y la arregló al momento. Excelente servicio.".to_string(),
            text_en: Some("I had a leak in the kitchen that no one could find. Arturo located it in 10 minutes and fixed it immediately. Excellent service.".to_string()),
            date: "2024-09".to_string(),
        },
        Testimonial {
            name: "Laura Martínez".to_string(),
            location: "Redondela".to_string(),
            service: "Urgencias 24h".to_string(),
            service_en: Some("24h Emergency".to_string()),
            rating: 5,
            text: "A las 11 de la noche se rompió una tubería. Le llamé y en media hora estaba aquí. Nos salvó de una inundación. Eternamente agradecidos.".to_string(),
            text_en: Some("At 11 PM a pipe burst. I called him and in half an hour he was here. He saved us from a flood. Eternally grateful.".to_string()),
            date: "2024-07".to_string(),
        },
        Testimonial {
            name: "Carmen Pérez".to_string(),
            location: "Gondomar".to_string(),
            service: "Desatascos".to_string(),
            service_en: Some("Drain Cleaning".to_string()),
            rating: 5,
            text: "Excelente fontanero. Desatascó el fregadero que llevaba semanas dando problemas. Muy amable y explica todo lo que hace.".to_string(),
            text_en: Some("Excellent plumber. Unblocked the sink that had been giving us problems for weeks. Very kind and explains everything he does.".to_string()),
            date: "2024-05".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_lookups() {
        let content = SiteContent::seed();
        assert!(content.service_by_slug("desatascos").is_some());
        assert!(content.service_by_slug("no-existe").is_none());
        assert!(content.city_by_slug("Gondomar").is_some());
        assert!(content.city_by_slug("madrid").is_none());
    }

    #[test]
    fn testimonials_are_newest_first() {
        let content = SiteContent::seed();
        let dates: Vec<&str> = content.testimonials.iter().map(|t| t.date.as_str()).collect();
        let mut sorted = dates.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(dates, sorted);
    }

    #[test]
    fn wire_shape_is_camel_case() {
        let content = SiteContent::seed();
        let json = serde_json::to_value(&content.services[0]).unwrap();
        assert!(json.get("priceRange").is_some());
        assert!(json.get("shortDescription").is_some());
        assert!(json.get("isEmergency").is_some());
    }
}
