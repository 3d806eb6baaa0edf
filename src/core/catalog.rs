//! Static stage catalog: the reference 15-stage hunt
//!
//! Leaf data, immutable at runtime. The engine depends only on the shape of
//! this list, never its content.

use crate::types::{Stage, StageStatus, UnlockSpec};
use crate::{COORD_TOLERANCE_DEG, FREQ_TOLERANCE_MHZ, SCAN_DURATION_SECS};

#[allow(clippy::too_many_arguments)]
fn stage(
    id: u32,
    title: &str,
    subtitle: &str,
    location: &str,
    time: &str,
    description: &str,
    clue: &str,
    spec: UnlockSpec,
    hints: [&str; 3],
) -> Stage {
    Stage {
        id,
        title: title.to_string(),
        subtitle: subtitle.to_string(),
        location: location.to_string(),
        time: time.to_string(),
        description: description.to_string(),
        clue: clue.to_string(),
        spec,
        hints: hints.map(str::to_string),
        status: StageStatus::Locked,
    }
}

fn gps(lat: f64, lng: f64, radius_m: f64) -> UnlockSpec {
    UnlockSpec::Gps {
        latitude: lat,
        longitude: lng,
        radius_meters: radius_m,
    }
}

fn coordinate_entry(lat: f64, lng: f64) -> UnlockSpec {
    UnlockSpec::CoordinateEntry {
        latitude: lat,
        longitude: lng,
        tolerance_degrees: COORD_TOLERANCE_DEG,
    }
}

fn scan() -> UnlockSpec {
    UnlockSpec::Scan {
        duration_secs: SCAN_DURATION_SECS,
    }
}

/// The ordered stage list, every status locked; run the engine's
/// `initialize` before use.
pub fn initial_stages() -> Vec<Stage> {
    vec![
        stage(
            1,
            "Stage 01",
            "The Origin",
            "Home",
            "09:00 AM",
            "Every story has a beginning. Ours started in the simplest place, \
             where a life gets built one moment at a time.",
            "Protocol initiated. Return to coordinates where SYSTEM.HOME was \
             first established. Memory file 2012.01 awaits decryption.",
            gps(39.1031, -84.5120, 200.0),
            [
                "The first checkpoint is always where you rest your head.",
                "Think about where the words were said for the first time.",
                "Home. Our home. Start there.",
            ],
        ),
        stage(
            2,
            "Stage 02",
            "The Hive",
            "Sleepy Bee Cafe",
            "09:30 AM",
            "Sunday mornings, iced coffee, and conversations that lasted for \
             hours. Breakfast as a ritual, not just a meal.",
            "LOCATION: The place where lazy Sundays began. SCAN TARGET: The \
             illuminated centerpiece above the usual table.",
            scan(),
            [
                "A weekend ritual from the first downtown years.",
                "Look up. Something hangs there that caught your eye once.",
                "The chandelier at Sleepy Bee. Scan it.",
            ],
        ),
        stage(
            3,
            "Stage 03",
            "Virtual Radio",
            "Covington Core",
            "11:30 AM",
            "Static and noise, until suddenly clarity. 2014 was the year the \
             signal came through.",
            "Cross the river. RADIO FREQUENCY DETECTED. Tune to the year it \
             all moved in together. Format: 20XX.XX MHz. Decode the \
             transmission.",
            UnlockSpec::Frequency {
                target_mhz: 20.50,
                tolerance_mhz: FREQ_TOLERANCE_MHZ,
            },
            [
                "The frequency corresponds to a year. A special one.",
                "The year of moving in together, in MHz format.",
                "2014 → 20.14 MHz. But something's off. Try 20.50 MHz.",
            ],
        ),
        stage(
            4,
            "Stage 04",
            "Gelato Dreams",
            "Mainstrasse Village",
            "11:45 AM",
            "Every adventure needs a moment of sweetness. Some memories taste \
             like pistachio and salted caramel.",
            "MAINSTRASSE VILLAGE. Seek the Italian confectionery where summer \
             lives year-round. The sweet spot.",
            gps(39.0872, -84.5089, 30.0),
            [
                "Across the river. Something cold, something Italian.",
                "Mainstrasse Village. Pistachio, always.",
                "Gelato. The place with the striped awning.",
            ],
        ),
        stage(
            5,
            "Stage 05",
            "Crystal Vision",
            "Dimitridon Studios",
            "12:15 PM",
            "Crystals hold energy, they say. Some for love, some for clarity, \
             some for healing.",
            "DIMITRIDON STUDIOS. Covington. SCAN TARGET: Two crystals. One \
             for unconditional love (rose). One for joy (citrine).",
            scan(),
            [
                "A crystal shop in Covington, visited once under protest.",
                "Rose Quartz, pink, for love. Citrine, golden, for happiness.",
                "Dimitridon Studios. Find both stones. Scan them together.",
            ],
        ),
        stage(
            6,
            "Stage 06",
            "The Bridge",
            "Roebling Suspension Bridge",
            "01:00 PM",
            "Every relationship is a bridge, a crossing between two shores. \
             This one spans water. Ours spans time.",
            "ROEBLING SUSPENSION BRIDGE. OBJECTIVE: Reach the midpoint. Stand \
             where Kentucky kisses Ohio. Where past meets present.",
            gps(39.0953, -84.5089, 50.0),
            [
                "The blue suspension bridge, walked before, hand in hand.",
                "Start on one side, walk to the middle.",
                "Roebling Bridge. Center point. Where the cables converge.",
            ],
        ),
        stage(
            7,
            "Stage 07",
            "Artifact Recovery",
            "Cincinnati Art Museum",
            "02:00 PM",
            "Free admission. Priceless memories. Quiet Sunday afternoons \
             wandering galleries.",
            "EDEN PARK. The museum on the hill. MISSION: Enter the galleries. \
             Just get inside. Proximity unlock.",
            gps(39.1145, -84.4968, 100.0),
            [
                "Eden Park. The art museum. Free to enter, like always.",
                "Dozens of visits. The way is known.",
                "Cincinnati Art Museum. 953 Eden Park Drive. Main entrance.",
            ],
        ),
        stage(
            8,
            "Stage 08",
            "Damascus Cipher",
            "Cincinnati Art Museum",
            "02:30 PM",
            "Like the folds in Damascus steel: strength through complexity, \
             meaning woven into every line.",
            "CIPHER DETECTED: Examine the Damascus steel artifact. The \
             pattern contains geographic data. Decode the waveform and enter \
             the extracted waypoint.",
            coordinate_entry(39.1515, -84.4460),
            [
                "Damascus steel has a distinctive wavy pattern. Study it.",
                "The waves aren't random. Maybe letters? Numbers?",
                "The pattern reveals coordinates. Enter them to proceed.",
            ],
        ),
        stage(
            9,
            "Stage 09",
            "Museum Exit",
            "Cincinnati Art Museum",
            "03:30 PM",
            "Every gallery visit has an ending. The art stays behind. The \
             memories come along.",
            "DEPARTURE PROTOCOL. Exit the museum. GEOFENCE: Leave the grounds. \
             Movement detected = stage unlocked.",
            gps(39.1145, -84.4968, 100.0),
            [
                "Enough time with the art. Time to go.",
                "Out the main entrance, toward the parking lot.",
                "Just leave the museum. The departure is detected.",
            ],
        ),
        stage(
            10,
            "Stage 10",
            "The 420 Protocol",
            "The Landing",
            "04:20 PM",
            "Sometimes the path gets hazy. Pause, breathe, recalibrate. 4:20, \
             a moment of perspective.",
            "THE LANDING. 4029 Smith Road. Riverside coordinates. SCAN \
             OBJECTIVE: The marker at the riverfront. Purify the signal.",
            scan(),
            [
                "The Landing. By the river. A familiar place.",
                "Look for something to scan. A marker that stands out.",
                "Use the scan function on arrival. The app knows the target.",
            ],
        ),
        stage(
            11,
            "Stage 11",
            "Safe House",
            "Home",
            "05:00 PM",
            "Even the longest journeys need a moment to breathe. Come home. \
             Rest. The best is yet to come.",
            "RECHARGE PROTOCOL ACTIVE. Return to SYSTEM.HOME at 17:00. Locate \
             the vintage pharmacist bottle in the honor system area.",
            UnlockSpec::Time {
                target_time: "17:00".to_string(),
            },
            [
                "Nothing proceeds until 5:00 PM. Take a break. Recharge.",
                "When it's time, check the honor system area.",
                "The vintage pharmacist bottle holds the next step.",
            ],
        ),
        stage(
            12,
            "Stage 12",
            "The Master Builder",
            "Art of the Brick",
            "06:00 PM",
            "Built together, brick by brick: small pieces that somehow became \
             something beautiful.",
            "DOWNTOWN. West 4th Street. LEGO exhibition. Seek the masterwork \
             that took millions of bricks to create.",
            gps(39.1000, -84.5120, 75.0),
            [
                "The exhibit talked about for months. It's finally here.",
                "Art made from LEGO. Downtown, near the brunch spot.",
                "Art of the Brick. 18 West 4th Street.",
            ],
        ),
        stage(
            13,
            "Stage 13",
            "Fungal Glow",
            "Krohn Conservatory",
            "07:15 PM",
            "Even in darkness, there is light. The mushrooms glow not because \
             they must, but because they can.",
            "EDEN PARK. Glass structure. SCAN TARGET: The bioluminescent \
             mushroom grid.",
            scan(),
            [
                "Eden Park again. The conservatory.",
                "A special exhibit with glowing mushrooms. Otherworldly.",
                "Krohn Conservatory. Scan the bioluminescent display.",
            ],
        ),
        stage(
            14,
            "Stage 14",
            "The Glitch Tracker",
            "Over-the-Rhine",
            "08:30 PM",
            "Not all who wander are lost. Sometimes they're recalibrating, \
             finding the signal in the noise.",
            "ANOMALY ALERT: Over-the-Rhine grid corruption detected. Decode \
             the glitch log and enter the central OTR coordinates to run the \
             purification protocol.",
            coordinate_entry(39.1100, -84.5150),
            [
                "The heart of Over-the-Rhine. The glitch log names the spot.",
                "This is about the journey through OTR at night.",
                "Central OTR: 39.1100, -84.5150. Enter and purify.",
            ],
        ),
        stage(
            15,
            "Stage 15",
            "Protocol Omega",
            "Nicola's Ristorante",
            "09:45 PM",
            "Fourteen years. Fifteen stages. One journey, at the end and the \
             beginning.",
            "FINAL PROTOCOL: Over-the-Rhine. Sycamore Street. Where fine wine \
             flows and candles flicker. Where this story reaches its \
             conclusion, or its next chapter.",
            gps(39.1122, -84.5106, 30.0),
            [
                "The favorite place for special occasions.",
                "Italian. Romantic. In OTR.",
                "Nicola's. 1420 Sycamore. Someone is waiting.",
            ],
        ),
    ]
}

// =============================================================================
// TESTS
// =============================================================================
