//! First-boot seeding of the movie catalog.
//!
//! Runs once at startup after store connectivity is established. The
//! count-then-insert sequence is not atomic: two instances booting against
//! the same empty store can both observe a zero count and double-insert.
//! A single instance is assumed to seed at boot.

use sqlx::PgPool;

use crate::models::movie::CreateMovie;
use crate::repositories::MovieRepo;

/// The records inserted into an empty store on first boot.
fn initial_movies() -> Vec<CreateMovie> {
    vec![
        CreateMovie {
            name: Some("Harry Potter and the Order of the Phoenix".into()),
            img: Some("https://bit.ly/2IcnSwz".into()),
            summary: Some(
                "Harry Potter and Dumbledore's warning about the return of Lord Voldemort \
                 is not heeded by the wizard authorities who, in turn, look to undermine \
                 Dumbledore's authority at Hogwarts and discredit Harry."
                    .into(),
            ),
        },
        CreateMovie {
            name: Some("The Lord of the Rings: The Fellowship of the Ring".into()),
            img: Some("https://bit.ly/2Ct1Lcg".into()),
            summary: Some(
                "A young hobbit, Frodo, who has found the One Ring that belongs to the Dark \
                 Lord Sauron, begins his journey with eight companions to Mount Doom, the \
                 only place where it can be destroyed."
                    .into(),
            ),
        },
        CreateMovie {
            name: Some("Avengers: Endgame".into()),
            img: Some("https://bit.ly/2PzcZlb".into()),
            summary: Some(
                "Adrift in space with no food or water, Tony Stark sends a message to \
                 Pepper Potts as his oxygen supply starts to dwindle. Meanwhile, the \
                 remaining Avengers -- Thor, Black Widow, Captain America, and Bruce \
                 Banner -- must figure out a way to bring back their vanquished allies for \
                 an epic showdown with Thanos -- the evil demigod who decimated the planet \
                 and the universe."
                    .into(),
            ),
        },
    ]
}

/// Insert the initial movie records if the store is empty.
///
/// Idempotent across restarts: any existing data suppresses the insert.
/// Errors propagate to the caller, which logs them and continues; a
/// failed seed never prevents the service from accepting requests.
pub async fn seed_initial_movies(pool: &PgPool) -> Result<(), sqlx::Error> {
    let count = MovieRepo::count(pool).await?;
    if count > 0 {
        tracing::info!(count, "Movie data already exists, skipping seed");
        return Ok(());
    }

    let movies = initial_movies();
    MovieRepo::insert_many(pool, &movies).await?;
    tracing::info!(inserted = movies.len(), "Initial movie data inserted");
    Ok(())
}
