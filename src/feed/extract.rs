// src/feed/extract.rs

use super::coerce::{
    count, country_code, currency, date_time, image_order, inspection, optional_date_time,
    optional_decimal, optional_flag, street_number, text,
};
use super::models::{
    Measure, RawAddress, RawAgent, RawBuildingDetails, RawFeatures, RawLandDetails, RawListing,
    RawMediaObject,
};
use crate::domain::{
    Address, BuildingDetails, CarParking, Communication, CommunicationType, Depth, Features,
    Inspection, Land, LandDetails, LandEstate, Listing, ListingAgent, ListingKind, ListingVariant,
    Media, PaymentFrequency, PropertyType, Rental, RentalPricing, Residential, Rural,
    RuralFeatures, SalePricing, StatusType, UnitOfMeasure,
};
use crate::errors::FieldError;
use crate::tracking::Tracked;
use chrono::NaiveDateTime;

/// Deserializes one listing fragment and maps it onto a fresh `Listing`.
///
/// The returned listing reports every field as modified, including the ones
/// the fragment left out, so a merge clears values the feed has dropped.
pub fn extract_listing(kind: ListingKind, xml: &str) -> Result<Listing, FieldError> {
    let raw: RawListing =
        quick_xml::de::from_str(xml).map_err(|e| FieldError::Malformed(e.to_string()))?;

    let mut listing = Listing::new(kind);
    extract_shared(&mut listing, &raw)?;

    match listing.variant_mut() {
        ListingVariant::Residential(residential) => extract_residential(residential, &raw)?,
        ListingVariant::Rental(rental) => extract_rental(rental, &raw)?,
        ListingVariant::Land(land) => extract_land(land, &raw)?,
        ListingVariant::Rural(rural) => extract_rural(rural, &raw)?,
    }

    listing.mark_all_modified();
    Ok(listing)
}

fn extract_shared(listing: &mut Listing, raw: &RawListing) -> Result<(), FieldError> {
    let id = text(raw.unique_id.as_deref()).ok_or(FieldError::Missing("uniqueID"))?;
    listing.set_id(id);
    listing.set_agency_id(text(raw.agent_id.as_deref()).unwrap_or_default());
    listing.set_status_type(status(raw.status.as_deref())?);

    // The feed has no creation time of its own.
    let updated_on = optional_date_time("modTime", raw.mod_time.as_deref())?;
    listing.set_updated_on(updated_on);
    listing.set_created_on(updated_on);

    listing.set_title(text(raw.headline.as_deref()));
    listing.set_description(text(raw.description.as_deref()));

    if raw.address.is_some() || raw.municipality.is_some() {
        listing.set_address(Some(address(raw.address.as_ref(), raw)?));
    }
    if let Some(features) = &raw.features {
        listing.set_features(Some(extract_features(features)?));
    }
    if let Some(details) = &raw.land_details {
        listing.set_land_details(land_details(details)?);
    }

    listing.replace_agents(agents(&raw.listing_agent));

    let images = raw
        .objects
        .iter()
        .chain(raw.images.iter())
        .flat_map(|objects| objects.img.iter());
    listing.replace_images(images_in_order(images)?);

    let floor_plans = raw
        .objects
        .iter()
        .chain(raw.images.iter())
        .flat_map(|objects| objects.floorplan.iter());
    listing.replace_floor_plans(floor_plans_in_order(floor_plans)?);

    let videos = raw
        .video_link
        .iter()
        .filter_map(|link| text(link.href.as_deref()))
        .enumerate()
        .map(|(i, url)| Media {
            url,
            order: i as u32 + 1,
            created_on: None,
            tag: None,
        })
        .collect();
    listing.replace_videos(videos);

    let mut inspections = Vec::new();
    if let Some(times) = &raw.inspection_times {
        for entry in &times.inspection {
            if let Some(parsed) = inspection(entry.text.as_deref().unwrap_or_default())? {
                inspections.push(parsed);
            }
        }
    }
    listing.replace_inspections(sorted_inspections(inspections));

    let links = raw
        .external_link
        .iter()
        .filter_map(|link| text(link.href.as_deref()))
        .collect();
    listing.replace_links(links);

    Ok(())
}

fn status(value: Option<&str>) -> Result<StatusType, FieldError> {
    match text(value) {
        None => Ok(StatusType::Unknown),
        Some(raw) => StatusType::from_feed(&raw).ok_or(FieldError::UnrecognizedStatus(raw)),
    }
}

fn coordinate(field: &'static str, value: Option<&str>) -> Result<Option<f64>, FieldError> {
    text(value)
        .map(|v| {
            v.parse::<f64>()
                .map_err(|_| FieldError::InvalidDecimal { field, value: v.clone() })
        })
        .transpose()
}

fn address(raw: Option<&RawAddress>, listing: &RawListing) -> Result<Address, FieldError> {
    let mut address = Address::default();
    address.set_municipality(text(listing.municipality.as_deref()));

    let Some(raw) = raw else {
        address.set_country_code(Some(country_code(None)?));
        return Ok(address);
    };

    address.set_street_number(street_number(
        raw.lot_number.as_deref(),
        raw.sub_number.as_deref(),
        raw.street_number.as_deref(),
    ));
    address.set_street(text(raw.street.as_deref()));
    address.set_suburb(text(
        raw.suburb.as_ref().and_then(|s| s.text.as_deref()),
    ));
    address.set_state(text(raw.state.as_deref()));
    address.set_postcode(text(raw.postcode.as_deref()));
    address.set_country_code(Some(country_code(raw.country.as_deref())?));
    address.set_latitude(coordinate("latitude", raw.latitude.as_deref())?);
    address.set_longitude(coordinate("longitude", raw.longitude.as_deref())?);
    address.set_is_street_displayed(optional_flag("address.display", raw.display.as_deref(), true)?);

    Ok(address)
}

fn communications(raw: &RawAgent) -> Vec<Communication> {
    let phones = raw.telephone.iter().filter_map(|phone| {
        let details = text(phone.text.as_deref())?;
        let communication_type = match phone.kind.as_deref().map(str::trim) {
            Some(kind) if kind.eq_ignore_ascii_case("mobile") => CommunicationType::Mobile,
            _ => CommunicationType::Landline,
        };
        Some(Communication {
            communication_type,
            details,
        })
    });

    let emails = raw.email.iter().filter_map(|email| {
        text(email.text.as_deref()).map(|details| Communication {
            communication_type: CommunicationType::Email,
            details,
        })
    });

    phones.chain(emails).collect()
}

/// Declared `@id` order first, then document order. Empty and repeated
/// agents are dropped and the survivors numbered 1..N.
fn agents(raw: &[RawAgent]) -> Vec<ListingAgent> {
    let mut declared: Vec<(u32, usize, &RawAgent)> = raw
        .iter()
        .enumerate()
        .map(|(position, agent)| {
            let id = agent
                .id
                .as_deref()
                .and_then(|id| id.trim().parse::<u32>().ok())
                .unwrap_or(u32::MAX);
            (id, position, agent)
        })
        .collect();
    declared.sort_by_key(|(id, position, _)| (*id, *position));

    let mut kept: Vec<ListingAgent> = Vec::new();
    for (_, _, agent) in declared {
        let candidate = ListingAgent {
            name: text(agent.name.as_deref()),
            order: 0,
            communications: communications(agent),
        };
        if candidate.is_empty() {
            continue;
        }

        let duplicate = kept.iter().any(|existing| match (&existing.name, &candidate.name) {
            (Some(a), Some(b)) => a.eq_ignore_ascii_case(b),
            (None, None) => existing.communications == candidate.communications,
            _ => false,
        });
        if !duplicate {
            kept.push(candidate);
        }
    }

    for (i, agent) in kept.iter_mut().enumerate() {
        agent.order = i as u32 + 1;
    }
    kept
}

fn media(
    object: &RawMediaObject,
    order: u32,
    url: String,
    field: &'static str,
) -> Result<Media, FieldError> {
    Ok(Media {
        url,
        order,
        created_on: optional_date_time(field, object.mod_time.as_deref())?,
        tag: text(object.format.as_deref()),
    })
}

fn images_in_order<'a>(
    objects: impl Iterator<Item = &'a RawMediaObject>,
) -> Result<Vec<Media>, FieldError> {
    let mut images = Vec::new();
    for object in objects {
        let Some(url) = text(object.url.as_deref()) else {
            continue;
        };
        let order = image_order(object.id.as_deref().unwrap_or_default())?;
        images.push(media(object, order, url, "img.modTime")?);
    }
    images.sort_by_key(|image| image.order);
    Ok(images)
}

fn floor_plans_in_order<'a>(
    objects: impl Iterator<Item = &'a RawMediaObject>,
) -> Result<Vec<Media>, FieldError> {
    let mut plans = Vec::new();
    for (position, object) in objects.enumerate() {
        let Some(url) = text(object.url.as_deref()) else {
            continue;
        };
        let order = object
            .id
            .as_deref()
            .and_then(|id| id.trim().parse::<u32>().ok())
            .unwrap_or(position as u32 + 1);
        plans.push(media(object, order, url, "floorplan.modTime")?);
    }
    plans.sort_by_key(|plan| plan.order);
    Ok(plans)
}

fn sorted_inspections(mut inspections: Vec<Inspection>) -> Vec<Inspection> {
    inspections.sort_by_key(|i| (i.opens_on, i.closes_on));
    inspections.dedup();
    inspections
}

fn extract_features(raw: &RawFeatures) -> Result<Features, FieldError> {
    let mut features = Features::default();
    features.set_bedrooms(count("bedrooms", raw.bedrooms.as_deref())?);
    features.set_bathrooms(count("bathrooms", raw.bathrooms.as_deref())?);
    features.set_ensuites(count("ensuite", raw.ensuite.as_deref())?);
    features.set_toilets(count("toilets", raw.toilets.as_deref())?);
    features.set_living_areas(count("livingAreas", raw.living_areas.as_deref())?);

    let garages = count("garages", raw.garages.as_deref())?;
    let carports = count("carports", raw.carports.as_deref())?;
    let open_spaces = count("openSpaces", raw.open_spaces.as_deref())?;
    if garages.is_some() || carports.is_some() || open_spaces.is_some() {
        let mut parking = CarParking::default();
        parking.set_garages(garages);
        parking.set_carports(carports);
        parking.set_open_spaces(open_spaces);
        features.set_car_parking(Some(parking));
    }
    features.set_car_spaces(count("carSpaces", raw.car_spaces.as_deref())?.or(garages));

    let mut tags = Vec::new();
    for (name, value) in raw.flags() {
        if optional_flag(name, value, false)? {
            tags.push(name.to_string());
        }
    }
    if let Some(other) = text(raw.other_features.as_deref()) {
        tags.extend(
            other
                .split(',')
                .map(str::trim)
                .filter(|tag| !tag.is_empty())
                .map(str::to_string),
        );
    }
    tags.sort();
    tags.dedup();
    features.replace_tags(tags);

    Ok(features)
}

fn measure(field: &'static str, raw: Option<&Measure>) -> Result<Option<UnitOfMeasure>, FieldError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    Ok(optional_decimal(field, raw.text.as_deref())?.map(|value| UnitOfMeasure {
        value,
        unit: text(raw.unit.as_deref()),
    }))
}

fn land_details(raw: &RawLandDetails) -> Result<Option<LandDetails>, FieldError> {
    let mut details = LandDetails::default();
    details.set_area(measure("landDetails.area", raw.area.as_ref())?);
    details.set_frontage(measure("landDetails.frontage", raw.frontage.as_ref())?);
    details.set_cross_over(text(
        raw.cross_over.as_ref().and_then(|c| c.value.as_deref()),
    ));

    let mut depths = Vec::new();
    for depth in &raw.depth {
        if let Some(value) = measure("landDetails.depth", Some(depth))? {
            depths.push(Depth {
                value,
                side: text(depth.side.as_deref()),
            });
        }
    }
    details.replace_depths(depths);

    if details.area().is_none()
        && details.frontage().is_none()
        && details.cross_over().is_none()
        && details.depths().is_empty()
    {
        return Ok(None);
    }
    Ok(Some(details))
}

/// Only an explicit "no" (or a false flag) hides a price.
fn is_displayed(field: &'static str, display: Option<&str>) -> Result<bool, FieldError> {
    optional_flag(field, display, true)
}

fn sale_pricing(raw: &RawListing) -> Result<Option<SalePricing>, FieldError> {
    if raw.price.is_none()
        && raw.price_view.is_none()
        && raw.under_offer.is_none()
        && raw.sold_details.is_none()
    {
        return Ok(None);
    }

    let mut pricing = SalePricing::default();

    let price = raw.price.as_ref();
    let sale_price = optional_decimal("price", price.and_then(|p| p.text.as_deref()))?;
    let displayed = is_displayed("price.display", price.and_then(|p| p.display.as_deref()))?;
    let sale_price_text = text(raw.price_view.as_deref())
        .or_else(|| sale_price.filter(|_| displayed).map(currency));
    pricing.set_sale_price(sale_price);
    pricing.set_sale_price_text(sale_price_text);
    pricing.set_is_under_offer(optional_flag(
        "underOffer",
        raw.under_offer.as_ref().and_then(|u| u.value.as_deref()),
        false,
    )?);

    if let Some(sold) = &raw.sold_details {
        let sold_value = sold.sold_price.as_ref().or(sold.price.as_ref());
        let sold_price = optional_decimal("soldPrice", sold_value.and_then(|p| p.text.as_deref()))?;
        let displayed =
            is_displayed("soldPrice.display", sold_value.and_then(|p| p.display.as_deref()))?;
        let sold_price_text = sold_price.filter(|_| displayed).map(currency);
        let sold_date = sold.sold_date.as_deref().or(sold.date.as_deref());

        pricing.set_sold_price(sold_price);
        pricing.set_sold_price_text(sold_price_text);
        pricing.set_sold_on(optional_date_time("soldDate", sold_date)?);
    }

    Ok(Some(pricing))
}

fn auction_on(raw: &RawListing) -> Result<Option<NaiveDateTime>, FieldError> {
    let Some(auction) = &raw.auction else {
        return Ok(None);
    };
    match text(auction.text.as_deref()).or_else(|| text(auction.date.as_deref())) {
        Some(value) => date_time("auction", &value).map(Some),
        None => Ok(None),
    }
}

fn property_type(raw: &RawListing) -> PropertyType {
    raw.category
        .as_ref()
        .and_then(|c| c.name.as_deref())
        .map(PropertyType::from_feed)
        .unwrap_or_default()
}

fn extract_residential(residential: &mut Residential, raw: &RawListing) -> Result<(), FieldError> {
    residential.set_property_type(property_type(raw));
    residential.set_auction_on(auction_on(raw)?);
    residential.set_pricing(sale_pricing(raw)?);
    Ok(())
}

fn extract_rental(rental: &mut Rental, raw: &RawListing) -> Result<(), FieldError> {
    rental.set_property_type(property_type(raw));
    rental.set_available_on(optional_date_time("dateAvailable", raw.date_available.as_deref())?);

    let rent = raw.rent.first();
    if rent.is_none() && raw.price_view.is_none() && raw.bond.is_none() {
        return Ok(());
    }

    let mut pricing = RentalPricing::default();
    let rental_price = optional_decimal("rent", rent.and_then(|r| r.text.as_deref()))?;
    let displayed = is_displayed("rent.display", rent.and_then(|r| r.display.as_deref()))?;
    let rental_price_text = text(raw.price_view.as_deref())
        .or_else(|| rental_price.filter(|_| displayed).map(currency));
    pricing.set_rental_price(rental_price);
    pricing.set_rental_price_text(rental_price_text);
    pricing.set_payment_frequency(
        rent.and_then(|r| r.period.as_deref())
            .map(PaymentFrequency::from_feed)
            .unwrap_or_default(),
    );
    pricing.set_bond(optional_decimal("bond", raw.bond.as_deref())?);
    rental.set_pricing(Some(pricing));

    Ok(())
}

fn extract_land(land: &mut Land, raw: &RawListing) -> Result<(), FieldError> {
    land.set_category_type(text(
        raw.land_category.as_ref().and_then(|c| c.name.as_deref()),
    ));
    land.set_auction_on(auction_on(raw)?);
    land.set_pricing(sale_pricing(raw)?);

    if let Some(estate) = &raw.estate {
        let mut extracted = LandEstate::default();
        extracted.set_name(text(estate.name.as_deref()));
        extracted.set_stage(text(estate.stage.as_deref()));
        land.set_estate(Some(extracted));
    }
    Ok(())
}

fn building_details(raw: &RawBuildingDetails) -> Result<BuildingDetails, FieldError> {
    let mut details = BuildingDetails::default();
    details.set_area(measure("buildingDetails.area", raw.area.as_ref())?);
    details.set_energy_rating(optional_decimal("energyRating", raw.energy_rating.as_deref())?);
    Ok(details)
}

fn extract_rural(rural: &mut Rural, raw: &RawListing) -> Result<(), FieldError> {
    rural.set_category_type(text(
        raw.rural_category.as_ref().and_then(|c| c.name.as_deref()),
    ));
    rural.set_pricing(sale_pricing(raw)?);

    if let Some(features) = &raw.rural_features {
        let mut extracted = RuralFeatures::default();
        extracted.set_fencing(text(features.fencing.as_deref()));
        extracted.set_annual_rainfall(text(features.annual_rainfall.as_deref()));
        extracted.set_soil_types(text(features.soil_types.as_deref()));
        extracted.set_improvements(text(features.improvements.as_deref()));
        extracted.set_irrigation(text(features.irrigation.as_deref()));
        extracted.set_council_rates(text(features.council_rates.as_deref()));
        extracted.set_carrying_capacity(text(features.carrying_capacity.as_deref()));
        extracted.set_services(text(features.services.as_deref()));
        rural.set_rural_features(Some(extracted));
    }
    if let Some(details) = &raw.building_details {
        rural.set_building_details(Some(building_details(details)?));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;

    const RESIDENTIAL: &str = r#"<residential modTime="2009-01-01-12:30:00" status="current">
  <agentID>XNWXNW</agentID>
  <uniqueID>RES-1</uniqueID>
  <listingAgent id="2">
    <name>Mr. Second</name>
    <telephone type="BH">05 1234 5678</telephone>
  </listingAgent>
  <listingAgent id="1">
    <name>Mr. First</name>
    <telephone type="mobile">0400 000 000</telephone>
    <email>first@example.com</email>
  </listingAgent>
  <listingAgent id="3">
    <name>MR. FIRST</name>
  </listingAgent>
  <listingAgent id="4"></listingAgent>
  <price display="yes">500000</price>
  <underOffer value="no"/>
  <address display="yes">
    <subNumber>2</subNumber>
    <lotNumber>32</lotNumber>
    <streetNumber>39</streetNumber>
    <street>Main Road</street>
    <suburb display="yes">RICHMOND</suburb>
    <state>vic</state>
    <postcode>3121</postcode>
    <country>AUS</country>
  </address>
  <municipality>Yarra</municipality>
  <category name="House"/>
  <headline>SHOW STOPPER!!!</headline>
  <description>Don't pass up an opportunity like this!</description>
  <features>
    <bedrooms>4</bedrooms>
    <bathrooms>2</bathrooms>
    <garages>2</garages>
    <carports>1</carports>
    <airConditioning>1</airConditioning>
    <pool>yes</pool>
    <spa>0</spa>
    <otherFeatures>shed,  solar panels ,pool</otherFeatures>
  </features>
  <inspectionTimes>
    <inspection>22-Dec-2009 11:00am to 1:00pm</inspection>
    <inspection></inspection>
    <inspection>21-Dec-2009 11:00am to 1:00pm</inspection>
    <inspection>22-Dec-2009 11:00am to 1:00pm</inspection>
  </inspectionTimes>
  <auction date="2009-02-04-18:30:00"/>
  <externalLink href="http://www.example.com/listing"/>
  <videoLink href="http://www.example.com/video"/>
  <objects>
    <img id="b" modTime="2009-01-01-12:30:00" url="http://example.com/b.jpg" format="jpg"/>
    <img id="m" url="http://example.com/m.jpg" format="jpg"/>
    <img id="a" url=""/>
    <floorplan id="2" url="http://example.com/fp2.gif" format="gif"/>
    <floorplan id="1" url="http://example.com/fp1.gif" format="gif"/>
  </objects>
</residential>"#;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn residential_shared_fields() {
        let listing = extract_listing(ListingKind::Residential, RESIDENTIAL).unwrap();

        assert_eq!(listing.id(), "RES-1");
        assert_eq!(listing.agency_id(), "XNWXNW");
        assert_eq!(*listing.status_type(), StatusType::Available);
        assert_eq!(*listing.updated_on(), Some(at(2009, 1, 1, 12, 30)));
        assert_eq!(listing.created_on(), listing.updated_on());
        assert_eq!(listing.title().as_deref(), Some("SHOW STOPPER!!!"));
        assert_eq!(listing.links(), &["http://www.example.com/listing".to_string()]);

        let address = listing.address().unwrap();
        assert_eq!(address.street_number().as_deref(), Some("LOT 32 2/39"));
        assert_eq!(address.suburb().as_deref(), Some("RICHMOND"));
        assert_eq!(address.municipality().as_deref(), Some("Yarra"));
        assert_eq!(address.country_code().as_deref(), Some("AU"));
        assert!(*address.is_street_displayed());
    }

    #[test]
    fn agents_are_ordered_deduplicated_and_renumbered() {
        let listing = extract_listing(ListingKind::Residential, RESIDENTIAL).unwrap();
        let agents = listing.agents();

        assert_eq!(agents.len(), 2);
        assert_eq!(agents[0].name.as_deref(), Some("Mr. First"));
        assert_eq!(agents[0].order, 1);
        assert_eq!(
            agents[0].communications,
            vec![
                Communication {
                    communication_type: CommunicationType::Mobile,
                    details: "0400 000 000".into()
                },
                Communication {
                    communication_type: CommunicationType::Email,
                    details: "first@example.com".into()
                },
            ]
        );
        assert_eq!(agents[1].name.as_deref(), Some("Mr. Second"));
        assert_eq!(agents[1].order, 2);
    }

    #[test]
    fn inspections_skip_blanks_and_duplicates() {
        let listing = extract_listing(ListingKind::Residential, RESIDENTIAL).unwrap();
        let opens: Vec<_> = listing.inspections().iter().map(|i| i.opens_on).collect();
        assert_eq!(opens, vec![at(2009, 12, 21, 11, 0), at(2009, 12, 22, 11, 0)]);
    }

    #[test]
    fn media_is_ordered() {
        let listing = extract_listing(ListingKind::Residential, RESIDENTIAL).unwrap();

        let images: Vec<_> = listing.images().iter().map(|m| (m.order, m.url.as_str())).collect();
        assert_eq!(
            images,
            vec![(1, "http://example.com/m.jpg"), (3, "http://example.com/b.jpg")]
        );
        assert_eq!(listing.images()[1].created_on, Some(at(2009, 1, 1, 12, 30)));
        assert_eq!(listing.images()[0].tag.as_deref(), Some("jpg"));

        let plans: Vec<_> = listing.floor_plans().iter().map(|m| m.order).collect();
        assert_eq!(plans, vec![1, 2]);
        assert_eq!(listing.videos().len(), 1);
    }

    #[test]
    fn features_and_tags() {
        let listing = extract_listing(ListingKind::Residential, RESIDENTIAL).unwrap();
        let features = listing.features().unwrap();

        assert_eq!(*features.bedrooms(), Some(4));
        assert_eq!(*features.car_spaces(), Some(2));
        assert_eq!(*features.car_parking().unwrap().carports(), Some(1));
        assert_eq!(
            features.tags(),
            &["airConditioning", "pool", "shed", "solar panels"].map(String::from)
        );
    }

    #[test]
    fn residential_pricing_and_auction() {
        let listing = extract_listing(ListingKind::Residential, RESIDENTIAL).unwrap();
        let ListingVariant::Residential(residential) = listing.variant() else {
            panic!("expected a residential variant");
        };

        assert_eq!(*residential.property_type(), PropertyType::House);
        assert_eq!(*residential.auction_on(), Some(at(2009, 2, 4, 18, 30)));

        let pricing = residential.pricing().unwrap();
        assert_eq!(*pricing.sale_price(), Some(Decimal::from(500_000)));
        assert_eq!(pricing.sale_price_text().as_deref(), Some("$500,000"));
        assert!(!*pricing.is_under_offer());
        assert_eq!(*pricing.sold_price(), None);
    }

    #[test]
    fn freshly_extracted_listing_reads_as_modified() {
        let listing = extract_listing(ListingKind::Residential, RESIDENTIAL).unwrap();
        assert!(listing.is_modified());
        assert!(listing.modified_data().is_scalar_modified("title"));
        assert!(listing.modified_data().is_collection_modified("images"));
    }

    #[test]
    fn absent_fields_are_still_reported_as_modified() {
        let xml = r#"<residential status="current"><uniqueID>X</uniqueID></residential>"#;
        let listing = extract_listing(ListingKind::Residential, xml).unwrap();

        assert_eq!(*listing.title(), None);
        let modified = listing.modified_data();
        assert!(modified.is_scalar_modified("title"));
        assert!(modified.is_scalar_modified("address"));
        assert!(modified.is_scalar_modified("features"));
        assert!(modified.is_collection_modified("inspections"));
        assert!(modified.is_collection_modified("videos"));
        assert!(listing.variant().modified_data().is_scalar_modified("auction_on"));
    }

    #[test]
    fn hidden_sold_price_has_no_text() {
        let xml = r#"<residential status="sold">
  <uniqueID>RES-2</uniqueID>
  <price display="no">500000</price>
  <priceView>Contact agent</priceView>
  <soldDetails>
    <soldPrice display="no">580000</soldPrice>
    <soldDate>2009-01-10-12:30:00</soldDate>
  </soldDetails>
</residential>"#;

        let listing = extract_listing(ListingKind::Residential, xml).unwrap();
        let pricing = listing.sale_pricing().unwrap();

        assert_eq!(pricing.sale_price_text().as_deref(), Some("Contact agent"));
        assert_eq!(*pricing.sold_price(), Some(Decimal::from(580_000)));
        assert_eq!(*pricing.sold_price_text(), None);
        assert_eq!(*pricing.sold_on(), Some(at(2009, 1, 10, 12, 30)));
    }

    #[test]
    fn rental_pricing() {
        let xml = r#"<rental modTime="2009-01-01-12:30:00" status="leased">
  <uniqueID>RENT-1</uniqueID>
  <rent period="week" display="yes">350</rent>
  <bond>1520</bond>
  <dateAvailable>2009-02-01</dateAvailable>
  <category name="Unit"/>
</rental>"#;

        let listing = extract_listing(ListingKind::Rental, xml).unwrap();
        let ListingVariant::Rental(rental) = listing.variant() else {
            panic!("expected a rental variant");
        };

        assert_eq!(*listing.status_type(), StatusType::Leased);
        assert_eq!(*rental.property_type(), PropertyType::Unit);
        assert_eq!(*rental.available_on(), Some(at(2009, 2, 1, 0, 0)));

        let pricing = rental.pricing().unwrap();
        assert_eq!(*pricing.rental_price(), Some(Decimal::from(350)));
        assert_eq!(pricing.rental_price_text().as_deref(), Some("$350"));
        assert_eq!(*pricing.payment_frequency(), PaymentFrequency::Weekly);
        assert_eq!(*pricing.bond(), Some(Decimal::from(1520)));
    }

    #[test]
    fn land_details_estate_and_category() {
        let xml = r#"<land modTime="2009-01-01-12:30:00" status="current">
  <uniqueID>LAND-1</uniqueID>
  <landCategory name="Residential"/>
  <auction>2009-03-01-10:00:00</auction>
  <landDetails>
    <area unit="square">80</area>
    <frontage unit="meter">20</frontage>
    <depth unit="meter" side="rear">40</depth>
    <depth unit="meter" side="left">60</depth>
    <crossOver value="left"/>
  </landDetails>
  <estate>
    <name>Panorama</name>
    <stage>5</stage>
  </estate>
</land>"#;

        let listing = extract_listing(ListingKind::Land, xml).unwrap();
        let ListingVariant::Land(land) = listing.variant() else {
            panic!("expected a land variant");
        };

        assert_eq!(land.category_type().as_deref(), Some("Residential"));
        assert_eq!(*land.auction_on(), Some(at(2009, 3, 1, 10, 0)));
        assert_eq!(land.estate().unwrap().name().as_deref(), Some("Panorama"));

        let details = listing.land_details().unwrap();
        assert_eq!(
            *details.area(),
            Some(UnitOfMeasure {
                value: Decimal::from(80),
                unit: Some("square".into())
            })
        );
        assert_eq!(details.depths().len(), 2);
        assert_eq!(details.depths()[0].side.as_deref(), Some("rear"));
        assert_eq!(details.cross_over().as_deref(), Some("left"));
    }

    #[test]
    fn rural_features_and_building_details() {
        let xml = r#"<rural modTime="2009-01-01-12:30:00" status="withdrawn">
  <uniqueID>RURAL-1</uniqueID>
  <ruralCategory name="Cropping"/>
  <ruralFeatures>
    <fencing>Boundary and internal fencing</fencing>
    <annualRainfall>250 mm</annualRainfall>
  </ruralFeatures>
  <buildingDetails>
    <area unit="square">40</area>
    <energyRating>4.5</energyRating>
  </buildingDetails>
</rural>"#;

        let listing = extract_listing(ListingKind::Rural, xml).unwrap();
        let ListingVariant::Rural(rural) = listing.variant() else {
            panic!("expected a rural variant");
        };

        assert_eq!(*listing.status_type(), StatusType::Withdrawn);
        assert_eq!(rural.category_type().as_deref(), Some("Cropping"));
        assert_eq!(
            rural.rural_features().unwrap().annual_rainfall().as_deref(),
            Some("250 mm")
        );
        assert_eq!(
            *rural.building_details().unwrap().energy_rating(),
            Some(Decimal::new(45, 1))
        );
    }

    #[test]
    fn field_errors_are_attributed() {
        let bad_price = r#"<residential status="current"><uniqueID>X</uniqueID><price>lots</price></residential>"#;
        assert_eq!(
            extract_listing(ListingKind::Residential, bad_price).unwrap_err(),
            FieldError::InvalidDecimal {
                field: "price",
                value: "lots".into()
            }
        );

        let bad_status = r#"<rental status="pending"><uniqueID>X</uniqueID></rental>"#;
        assert_eq!(
            extract_listing(ListingKind::Rental, bad_status).unwrap_err(),
            FieldError::UnrecognizedStatus("pending".into())
        );

        let bad_display = r#"<residential status="current"><uniqueID>X</uniqueID><price display="maybe">1</price></residential>"#;
        assert_eq!(
            extract_listing(ListingKind::Residential, bad_display).unwrap_err(),
            FieldError::InvalidFlag {
                field: "price.display",
                value: "maybe".into()
            }
        );

        let bad_rent_display = r#"<rental status="current"><uniqueID>X</uniqueID><rent period="week" display="sometimes">350</rent></rental>"#;
        assert_eq!(
            extract_listing(ListingKind::Rental, bad_rent_display).unwrap_err(),
            FieldError::InvalidFlag {
                field: "rent.display",
                value: "sometimes".into()
            }
        );

        let no_id = r#"<land status="current"></land>"#;
        assert_eq!(
            extract_listing(ListingKind::Land, no_id).unwrap_err(),
            FieldError::Missing("uniqueID")
        );
    }

    #[test]
    fn address_without_country_defaults_to_au() {
        let xml = r#"<residential status="current">
  <uniqueID>X</uniqueID>
  <address><lotNumber>12</lotNumber><subNumber>39</subNumber><streetNumber></streetNumber></address>
</residential>"#;

        let listing = extract_listing(ListingKind::Residential, xml).unwrap();
        let address = listing.address().unwrap();
        assert_eq!(address.street_number().as_deref(), Some("LOT 12 39"));
        assert_eq!(address.country_code().as_deref(), Some("AU"));
    }
}
