//! Static storefront content: the featured campaign grid and the dashboard seed data.

use chrono::Duration;
use serde::Serialize;

use crate::wallet::WalletStatus;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeaturedCampaign {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    /// Reward in whole tokens.
    pub reward: &'static str,
    pub time_left: String,
    pub icon: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Participation {
    pub id: u32,
    pub campaign: &'static str,
    pub status: &'static str,
    pub reward: &'static str,
    /// Percent complete, 0 to 100.
    pub progress: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub address: Option<String>,
    pub joined: &'static str,
    pub total_earnings: &'static str,
    pub campaigns_joined: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dashboard {
    pub profile: Profile,
    pub participations: Vec<Participation>,
}

pub fn featured_campaigns() -> Vec<FeaturedCampaign> {
    vec![
        FeaturedCampaign {
            id: 1,
            name: "Sleep Data Collection",
            description: "Share your sleep patterns data from wearable devices for AI research.",
            reward: "50",
            time_left: describe_time_left(Duration::days(5)),
            icon: "😴",
        },
        FeaturedCampaign {
            id: 2,
            name: "Fitness Activity Data",
            description: "Contribute your workout and activity data for health research.",
            reward: "75",
            time_left: describe_time_left(Duration::days(3)),
            icon: "🏃‍♂️",
        },
        FeaturedCampaign {
            id: 3,
            name: "Heart Rate Monitoring",
            description: "Share heart rate data from your smartwatch for medical research.",
            reward: "100",
            time_left: describe_time_left(Duration::days(7)),
            icon: "❤️",
        },
    ]
}

pub fn dashboard(wallet: &WalletStatus) -> Dashboard {
    Dashboard {
        profile: Profile {
            address: wallet.connected.then(|| wallet.label.clone()),
            joined: "Dec 2023",
            total_earnings: "250",
            campaigns_joined: 5,
        },
        participations: vec![
            Participation {
                id: 1,
                campaign: "Sleep Data Collection",
                status: "In Progress",
                reward: "50",
                progress: 75,
            },
            Participation {
                id: 2,
                campaign: "Fitness Activity Data",
                status: "Pending Verification",
                reward: "75",
                progress: 90,
            },
        ],
    }
}

/// Coarse countdown label: days, then hours, then "Ended".
pub fn describe_time_left(remaining: Duration) -> String {
    let days = remaining.num_days();
    let hours = remaining.num_hours();
    match (days, hours) {
        (d, _) if d > 1 => format!("{d} days"),
        (1, _) => "1 day".to_string(),
        (_, h) if h > 1 => format!("{h} hours"),
        (_, 1) => "1 hour".to_string(),
        _ if remaining > Duration::zero() => "Less than an hour".to_string(),
        _ => "Ended".to_string(),
    }
}
