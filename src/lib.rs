/*!
`yamusic` is a client for the playlist endpoints of the [Yandex Music](https://music.yandex.ru) API,
with a small CLI on top.

```ignore
use yamusic::config::{Config, ConfigBuilder};
use yamusic::types::Token;
use yamusic::yamusic::YaMusic;

let config = ConfigBuilder::default()
    .token(Token::try_new("<oauth token>")?)
    .user_id(123456_u64)
    .build()?;
let api = YaMusic::new(&config)?;

let resp = api.playlists().list(api.user_id()).await?;
for playlist in resp.data.result {
    println!("{playlist}");
}
```
 */

pub mod cli;
pub mod config;
pub mod error;
pub mod http_client;
pub mod logger;
pub mod types;
pub mod utils;
pub mod yamusic;

pub use error::{Error, Result};
