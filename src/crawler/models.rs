use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub system_name: String,
    pub name: String,
    pub residential_complexes: Vec<ResidentialComplex>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResidentialComplex {
    pub internal_id: String,
    pub name: String,
    pub geo_location: GeoLocation,
    pub render_image_url: String,
    pub presentation_url: Option<String>,
    pub flats: Vec<Flat>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoLocation {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Flat {
    pub residential_complex_internal_id: String,
    pub developer_url: String,
    pub price: String,
    pub floor: i32,
    pub area: String,
    pub rooms: u32,
    pub building_deadline: String,
    pub layout_image_url: String,
}
