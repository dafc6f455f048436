use serde::Deserialize;

// residential | rental | land | rural   (@modTime, @status)
//  ├── agentID, uniqueID, headline, description
//  ├── listingAgent*  (@id)
//  │    ├── name
//  │    ├── telephone*  (@type)
//  │    └── email*
//  ├── price (@display), priceView, underOffer (@value)
//  ├── rent* (@period, @display), bond, dateAvailable
//  ├── address (@display)
//  │    ├── subNumber, lotNumber, streetNumber, street
//  │    ├── suburb, state, postcode, country
//  │    └── latitude, longitude
//  ├── municipality
//  ├── category | landCategory | ruralCategory  (@name)
//  ├── features
//  ├── inspectionTimes
//  │    └── inspection*
//  ├── landDetails
//  │    ├── area, frontage (@unit)
//  │    ├── depth* (@unit, @side)
//  │    └── crossOver (@value)
//  ├── buildingDetails, ruralFeatures, estate
//  ├── externalLink*, videoLink*  (@href)
//  ├── auction (@date | text)
//  ├── objects | images
//  │    ├── img*       (@id, @url, @modTime, @format)
//  │    └── floorplan* (@id, @url, @modTime, @format)
//  └── soldDetails
//       ├── soldPrice | price (@display)
//       └── soldDate | date

/// One listing element exactly as the feed spells it. Every value stays a
/// string here; coercion happens in `extract`, where failures can be
/// attributed to a field.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawListing {
    #[serde(rename = "@modTime")]
    pub mod_time: Option<String>,
    #[serde(rename = "@status")]
    pub status: Option<String>,

    #[serde(rename = "agentID")]
    pub agent_id: Option<String>,
    #[serde(rename = "uniqueID")]
    pub unique_id: Option<String>,
    pub headline: Option<String>,
    pub description: Option<String>,

    #[serde(default)]
    pub listing_agent: Vec<RawAgent>,

    pub price: Option<DisplayValue>,
    pub price_view: Option<String>,
    pub under_offer: Option<ValueAttr>,

    #[serde(default)]
    pub rent: Vec<RawRent>,
    pub bond: Option<String>,
    pub date_available: Option<String>,

    pub address: Option<RawAddress>,
    pub municipality: Option<String>,
    pub category: Option<NameAttr>,
    pub land_category: Option<NameAttr>,
    pub rural_category: Option<NameAttr>,

    pub features: Option<RawFeatures>,
    pub inspection_times: Option<RawInspectionTimes>,
    pub land_details: Option<RawLandDetails>,
    pub building_details: Option<RawBuildingDetails>,
    pub rural_features: Option<RawRuralFeatures>,
    pub estate: Option<RawEstate>,

    #[serde(default)]
    pub external_link: Vec<HrefAttr>,
    #[serde(default)]
    pub video_link: Vec<HrefAttr>,

    pub auction: Option<RawAuction>,
    pub objects: Option<RawObjects>,
    pub images: Option<RawObjects>,
    pub sold_details: Option<RawSoldDetails>,
}

/// Element text only, e.g. `<inspection>...</inspection>`.
#[derive(Debug, Default, Deserialize)]
pub struct TextElement {
    #[serde(rename = "$text")]
    pub text: Option<String>,
}

/// `<price display="no">500000</price>`
#[derive(Debug, Default, Deserialize)]
pub struct DisplayValue {
    #[serde(rename = "@display")]
    pub display: Option<String>,
    #[serde(rename = "$text")]
    pub text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ValueAttr {
    #[serde(rename = "@value")]
    pub value: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct NameAttr {
    #[serde(rename = "@name")]
    pub name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct HrefAttr {
    #[serde(rename = "@href")]
    pub href: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAgent {
    #[serde(rename = "@id")]
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(default)]
    pub telephone: Vec<RawTelephone>,
    #[serde(default)]
    pub email: Vec<TextElement>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawTelephone {
    #[serde(rename = "@type")]
    pub kind: Option<String>,
    #[serde(rename = "$text")]
    pub text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawRent {
    #[serde(rename = "@period")]
    pub period: Option<String>,
    #[serde(rename = "@display")]
    pub display: Option<String>,
    #[serde(rename = "$text")]
    pub text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAddress {
    #[serde(rename = "@display")]
    pub display: Option<String>,
    pub sub_number: Option<String>,
    pub lot_number: Option<String>,
    pub street_number: Option<String>,
    pub street: Option<String>,
    pub suburb: Option<TextElement>,
    pub state: Option<String>,
    pub postcode: Option<String>,
    pub country: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFeatures {
    pub bedrooms: Option<String>,
    pub bathrooms: Option<String>,
    pub ensuite: Option<String>,
    pub toilets: Option<String>,
    pub living_areas: Option<String>,
    pub garages: Option<String>,
    pub carports: Option<String>,
    pub open_spaces: Option<String>,
    pub car_spaces: Option<String>,

    pub air_conditioning: Option<String>,
    pub alarm_system: Option<String>,
    pub vacuum_system: Option<String>,
    pub intercom: Option<String>,
    pub pool: Option<String>,
    pub spa: Option<String>,
    pub tennis_court: Option<String>,
    pub open_fire_place: Option<String>,
    pub balcony: Option<String>,
    pub deck: Option<String>,
    pub courtyard: Option<String>,
    pub outdoor_ent: Option<String>,
    pub shed: Option<String>,
    pub fully_fenced: Option<String>,
    pub remote_garage: Option<String>,
    pub secure_parking: Option<String>,
    pub broadband: Option<String>,
    pub built_in_robes: Option<String>,
    pub dishwasher: Option<String>,
    pub gym: Option<String>,
    pub study: Option<String>,
    pub workshop: Option<String>,
    pub floorboards: Option<String>,
    pub rumpus_room: Option<String>,
    pub ducted_heating: Option<String>,
    pub ducted_cooling: Option<String>,
    pub reverse_cycle_aircon: Option<String>,
    pub hydronic_heating: Option<String>,

    pub other_features: Option<String>,
}

impl RawFeatures {
    /// Boolean feature flags keyed by the tag name they produce.
    pub fn flags(&self) -> [(&'static str, Option<&str>); 28] {
        [
            ("airConditioning", self.air_conditioning.as_deref()),
            ("alarmSystem", self.alarm_system.as_deref()),
            ("vacuumSystem", self.vacuum_system.as_deref()),
            ("intercom", self.intercom.as_deref()),
            ("pool", self.pool.as_deref()),
            ("spa", self.spa.as_deref()),
            ("tennisCourt", self.tennis_court.as_deref()),
            ("openFirePlace", self.open_fire_place.as_deref()),
            ("balcony", self.balcony.as_deref()),
            ("deck", self.deck.as_deref()),
            ("courtyard", self.courtyard.as_deref()),
            ("outdoorEnt", self.outdoor_ent.as_deref()),
            ("shed", self.shed.as_deref()),
            ("fullyFenced", self.fully_fenced.as_deref()),
            ("remoteGarage", self.remote_garage.as_deref()),
            ("secureParking", self.secure_parking.as_deref()),
            ("broadband", self.broadband.as_deref()),
            ("builtInRobes", self.built_in_robes.as_deref()),
            ("dishwasher", self.dishwasher.as_deref()),
            ("gym", self.gym.as_deref()),
            ("study", self.study.as_deref()),
            ("workshop", self.workshop.as_deref()),
            ("floorboards", self.floorboards.as_deref()),
            ("rumpusRoom", self.rumpus_room.as_deref()),
            ("ductedHeating", self.ducted_heating.as_deref()),
            ("ductedCooling", self.ducted_cooling.as_deref()),
            ("reverseCycleAircon", self.reverse_cycle_aircon.as_deref()),
            ("hydronicHeating", self.hydronic_heating.as_deref()),
        ]
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct RawInspectionTimes {
    #[serde(default)]
    pub inspection: Vec<TextElement>,
}

/// `<depth unit="meter" side="rear">40</depth>`
#[derive(Debug, Default, Deserialize)]
pub struct Measure {
    #[serde(rename = "@unit")]
    pub unit: Option<String>,
    #[serde(rename = "@side")]
    pub side: Option<String>,
    #[serde(rename = "$text")]
    pub text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLandDetails {
    pub area: Option<Measure>,
    pub frontage: Option<Measure>,
    #[serde(default)]
    pub depth: Vec<Measure>,
    pub cross_over: Option<ValueAttr>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBuildingDetails {
    pub area: Option<Measure>,
    pub energy_rating: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRuralFeatures {
    pub fencing: Option<String>,
    pub annual_rainfall: Option<String>,
    pub soil_types: Option<String>,
    pub improvements: Option<String>,
    pub irrigation: Option<String>,
    pub council_rates: Option<String>,
    pub carrying_capacity: Option<String>,
    pub services: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawEstate {
    pub name: Option<String>,
    pub stage: Option<String>,
}

/// `<auction date="..."/>` or `<auction>...</auction>`
#[derive(Debug, Default, Deserialize)]
pub struct RawAuction {
    #[serde(rename = "@date")]
    pub date: Option<String>,
    #[serde(rename = "$text")]
    pub text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawObjects {
    #[serde(default)]
    pub img: Vec<RawMediaObject>,
    #[serde(default)]
    pub floorplan: Vec<RawMediaObject>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawMediaObject {
    #[serde(rename = "@id")]
    pub id: Option<String>,
    #[serde(rename = "@url")]
    pub url: Option<String>,
    #[serde(rename = "@modTime")]
    pub mod_time: Option<String>,
    #[serde(rename = "@format")]
    pub format: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSoldDetails {
    pub sold_price: Option<DisplayValue>,
    pub price: Option<DisplayValue>,
    pub sold_date: Option<String>,
    pub date: Option<String>,
}
