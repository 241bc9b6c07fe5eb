//! Fixed sample data loaded at process start
//!
//! The catalog every process starts with: 13 videos (4 featured, 6 trending,
//! 3 most-moronic ranked 1 to 3) and 4 creators. Users, ratings, and
//! subscriptions start empty and accumulate for the life of the process.

use chrono::Utc;

use super::models::{Creator, NewCreator, NewVideo, Video};
use super::StoreInner;

pub(super) fn populate(inner: &mut StoreInner) {
    for new_video in sample_videos() {
        let id = inner.next_video_id;
        inner.next_video_id += 1;
        inner.videos.insert(
            id,
            Video {
                id,
                title: new_video.title,
                description: new_video.description,
                thumbnail_url: new_video.thumbnail_url,
                duration: new_video.duration,
                category: new_video.category,
                views: new_video.views,
                is_featured: new_video.is_featured,
                is_trending: new_video.is_trending,
                is_most_moronic: new_video.is_most_moronic,
                rank: new_video.rank,
                created_at: Utc::now(),
            },
        );
    }

    for new_creator in sample_creators() {
        let id = inner.next_creator_id;
        inner.next_creator_id += 1;
        inner.creators.insert(
            id,
            Creator {
                id,
                name: new_creator.name,
                description: new_creator.description,
                image_url: new_creator.image_url,
                specialty: new_creator.specialty,
                followers: new_creator.followers,
            },
        );
    }
}

fn base_video() -> NewVideo {
    NewVideo {
        title: String::new(),
        description: None,
        thumbnail_url: String::new(),
        duration: String::new(),
        category: String::new(),
        views: 0,
        is_featured: false,
        is_trending: false,
        is_most_moronic: false,
        rank: None,
    }
}

fn sample_videos() -> Vec<NewVideo> {
    vec![
        NewVideo {
            title: "Why Drinking Water is a LIBERAL CONSPIRACY!".into(),
            description: Some(
                "Exposing the truth behind Big Water's agenda to control your mind through hydration."
                    .into(),
            ),
            thumbnail_url:
                "https://images.unsplash.com/photo-1504711434969-e33886168f5c?w=800&h=450&fit=crop"
                    .into(),
            duration: "5:46".into(),
            category: "health".into(),
            views: 1_250_000,
            is_featured: true,
            ..base_video()
        },
        NewVideo {
            title: "My Cat Understands Economics Better Than You!".into(),
            description: Some(
                "Mr. Whiskers shares his insights on cryptocurrency and fiscal policy.".into(),
            ),
            thumbnail_url:
                "https://images.unsplash.com/photo-1583908701673-4cb5f290b548?w=150&h=100&fit=crop"
                    .into(),
            duration: "8:32".into(),
            category: "finance".into(),
            views: 455_000,
            is_featured: true,
            ..base_video()
        },
        NewVideo {
            title: "Why I Haven't Showered in 6 Months: A Wellness Journey".into(),
            description: Some(
                "Embracing your natural musk is the key to spiritual enlightenment.".into(),
            ),
            thumbnail_url:
                "https://images.unsplash.com/photo-1513682322455-ea8b2d81d418?w=150&h=100&fit=crop"
                    .into(),
            duration: "10:45".into(),
            category: "health".into(),
            views: 789_000,
            is_featured: true,
            ..base_video()
        },
        NewVideo {
            title: "Running Actually DESTROYS Your Body: A Couch Expert Explains".into(),
            description: Some(
                "Why exercise is a scam and how remaining stationary is the true path to health."
                    .into(),
            ),
            thumbnail_url:
                "https://images.unsplash.com/photo-1501447748741-aca2be65f92c?w=150&h=100&fit=crop"
                    .into(),
            duration: "7:18".into(),
            category: "health".into(),
            views: 325_000,
            is_featured: true,
            ..base_video()
        },
        NewVideo {
            title: "Why Flat Earth Theory Makes Perfect Sense (Trust Me, I'm an Instagram Expert)"
                .into(),
            description: Some(
                "Irrefutable evidence gathered from memes and conspiracy forums.".into(),
            ),
            thumbnail_url:
                "https://images.unsplash.com/photo-1503551723145-6c040742065b-v2?w=400&h=225&fit=crop"
                    .into(),
            duration: "12:34".into(),
            category: "science".into(),
            views: 345_000,
            is_trending: true,
            ..base_video()
        },
        NewVideo {
            title: "I Became a Finance Expert by Watching TikToks for 3 Days".into(),
            description: Some(
                "How 15-second videos made me a Wall Street genius overnight.".into(),
            ),
            thumbnail_url:
                "https://images.unsplash.com/photo-1463453091185-61582044d556?w=400&h=225&fit=crop"
                    .into(),
            duration: "8:52".into(),
            category: "finance".into(),
            views: 1_200_000,
            is_trending: true,
            ..base_video()
        },
        NewVideo {
            title: "Why 5G Towers Are Actually Mind-Control Devices (I Did My Own Research)".into(),
            description: Some("The sinister truth behind your faster internet connection.".into()),
            thumbnail_url:
                "https://images.unsplash.com/photo-1531746020798-e6953c6e8e04?w=400&h=225&fit=crop"
                    .into(),
            duration: "16:05".into(),
            category: "tech".into(),
            views: 892_000,
            is_trending: true,
            ..base_video()
        },
        NewVideo {
            title:
                "The Secret Health Benefits of NEVER Exercising (Big Fitness Doesn't Want You to Know!)"
                    .into(),
            description: Some("Why the couch is your true fitness partner.".into()),
            thumbnail_url:
                "https://images.unsplash.com/photo-1543002588-bfa74002ed7e?w=400&h=225&fit=crop"
                    .into(),
            duration: "7:12".into(),
            category: "health".into(),
            views: 678_000,
            is_trending: true,
            ..base_video()
        },
        NewVideo {
            title: "Why My Essential Oil Business Is Better Than Medical School".into(),
            description: Some(
                "Skip the student loans and go straight to healing with these magic bottles!"
                    .into(),
            ),
            thumbnail_url:
                "https://images.unsplash.com/photo-1557426272-fc759fdf7a8d?w=400&h=225&fit=crop"
                    .into(),
            duration: "10:22".into(),
            category: "health".into(),
            views: 2_100_000,
            is_trending: true,
            ..base_video()
        },
        NewVideo {
            title: "I Quit My Job to Invest in NFTs: A Success Story (Please Send Money)".into(),
            description: Some(
                "How digital pictures of monkeys ruined my life but I'm still calling it a win!"
                    .into(),
            ),
            thumbnail_url:
                "https://images.unsplash.com/photo-1589254065878-42c9da997008?w=400&h=225&fit=crop"
                    .into(),
            duration: "14:42".into(),
            category: "finance".into(),
            views: 532_000,
            is_trending: true,
            ..base_video()
        },
        NewVideo {
            title:
                "I Replaced All Medicines With Energy Crystals: What Happened Next Will Shock You!"
                    .into(),
            description: Some("Spoiler: I'm recording this from a hospital bed.".into()),
            thumbnail_url:
                "https://images.unsplash.com/photo-1567364300385-a9c0013e1daf?w=400&h=225&fit=crop"
                    .into(),
            duration: "18:27".into(),
            category: "health".into(),
            views: 5_800_000,
            is_most_moronic: true,
            rank: Some(1),
            ..base_video()
        },
        NewVideo {
            title:
                "Why I've Never Paid Taxes and Neither Should You (DISCLAIMER: I'm Currently in Prison)"
                    .into(),
            description: Some("The government hates this one weird trick!".into()),
            thumbnail_url:
                "https://images.unsplash.com/photo-1535303311164-664fc9ec6532?w=400&h=225&fit=crop"
                    .into(),
            duration: "21:08".into(),
            category: "finance".into(),
            views: 4_200_000,
            is_most_moronic: true,
            rank: Some(2),
            ..base_video()
        },
        NewVideo {
            title:
                "I Started a Business Selling Air in Jars: My Journey to Almost Being a Millionaire"
                    .into(),
            description: Some(
                "Premium oxygen from exotic locations, now available in installments!".into(),
            ),
            thumbnail_url:
                "https://images.unsplash.com/photo-1541560052-5e137f229371?w=400&h=225&fit=crop"
                    .into(),
            duration: "15:45".into(),
            category: "finance".into(),
            views: 3_900_000,
            is_most_moronic: true,
            rank: Some(3),
            ..base_video()
        },
    ]
}

fn sample_creators() -> Vec<NewCreator> {
    vec![
        NewCreator {
            name: "Dr. Finance Bro".into(),
            description: Some(
                "Dropped out of business school after 2 weeks. Now a crypto millionaire (allegedly)."
                    .into(),
            ),
            image_url:
                "https://images.unsplash.com/photo-1560250097-0b93528c311a?w=300&h=300&fit=crop"
                    .into(),
            specialty: "FINANCE EXPERT".into(),
            followers: 2_400_000,
        },
        NewCreator {
            name: "Conspiracy Carol".into(),
            description: Some(
                "Professional dot-connector. Sees patterns where there are none. Has a tinfoil hat collection."
                    .into(),
            ),
            image_url:
                "https://images.unsplash.com/photo-1590649232850-54b5f324069f?w=300&h=300&fit=crop"
                    .into(),
            specialty: "TRUTH SEEKER".into(),
            followers: 1_800_000,
        },
        NewCreator {
            name: "Science Denier Dave".into(),
            description: Some(
                "Did his own research on YouTube. Questions gravity. Thinks clouds are government drones."
                    .into(),
            ),
            image_url:
                "https://images.unsplash.com/photo-1521119989659-a83eee488004?w=300&h=300&fit=crop"
                    .into(),
            specialty: "FREE THINKER".into(),
            followers: 3_200_000,
        },
        NewCreator {
            name: "Wellness Wanda".into(),
            description: Some(
                "Sells miracle cures. Believes diseases are just \"bad vibes.\" Charges $500 for consultations."
                    .into(),
            ),
            image_url:
                "https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?w=300&h=300&fit=crop"
                    .into(),
            specialty: "HEALTH GURU".into(),
            followers: 4_700_000,
        },
    ]
}
