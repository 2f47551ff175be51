//! Lua scripts. Redis runs a script without interleaving any other command,
//! which gives each batch the same all-or-nothing visibility a SQL
//! transaction would.
//!
//! A script that errors after its first write leaves that write in place, so
//! both scripts read and validate everything they need before writing.

use std::sync::LazyLock;

use redis::Script;

/// Largest integer a Lua number represents exactly.
pub const LUA_MAX_EXACT: i64 = 9_007_199_254_740_991;

/// Apply one batch of signed deltas with clamp-at-zero.
///
/// `KEYS[1]` class set, `KEYS[2]` sum hash, `KEYS[2 + i]` count hash of the
/// i-th class. `ARGV[1]` is the class count; then, per class, the class name,
/// the number of words `n`, and `n` word/delta pairs.
///
/// Returns `{increments, decrements, clamped}`.
pub const INCREMENT_SRC: &str = r#"
local LIMIT = 9007199254740991
local pos = 2
local plans = {}

for i = 1, tonumber(ARGV[1]) do
    local class = ARGV[pos]
    local n = tonumber(ARGV[pos + 1])
    local key = KEYS[2 + i]
    pos = pos + 2

    local raw_total = redis.call('HGET', KEYS[2], class)
    local total = 0
    if raw_total then
        total = tonumber(raw_total)
        if not total then
            return redis.error_reply('CORRUPT ' .. KEYS[2] .. ' ' .. class)
        end
    end

    local plan = {class = class, key = key, words = {}, delta = 0, positive = false}
    for j = 1, n do
        local word = ARGV[pos]
        local requested = tonumber(ARGV[pos + 1])
        pos = pos + 2

        local raw = redis.call('HGET', key, word)
        local current = 0
        if raw then
            current = tonumber(raw)
            if not current then
                return redis.error_reply('CORRUPT ' .. key .. ' ' .. word)
            end
        end

        local effective = requested
        if requested < 0 then
            if current <= 0 then
                effective = 0
            elseif requested < -current then
                effective = -current
            end
        else
            plan.positive = true
        end
        if current + effective > LIMIT then
            return redis.error_reply('OVERFLOW ' .. key .. ' ' .. word)
        end

        plan.words[j] = {word, requested, effective}
        plan.delta = plan.delta + effective
    end

    if total + plan.delta > LIMIT then
        return redis.error_reply('OVERFLOW ' .. KEYS[2] .. ' ' .. class)
    end
    plans[i] = plan
end

local increments, decrements, clamped = 0, 0, 0
for _, plan in ipairs(plans) do
    if plan.positive then
        redis.call('SADD', KEYS[1], plan.class)
    end
    for _, w in ipairs(plan.words) do
        if w[2] > 0 then
            increments = increments + 1
        else
            decrements = decrements + 1
            if w[3] ~= w[2] then
                clamped = clamped + 1
            end
        end
        if w[3] ~= 0 then
            redis.call('HINCRBY', plan.key, w[1], w[3])
        end
    end
    if plan.delta ~= 0 then
        redis.call('HINCRBY', KEYS[2], plan.class, plan.delta)
    end
end

return {increments, decrements, clamped}
"#;

/// Delete every key the store owns.
///
/// `KEYS[1]` class set, `KEYS[2]` sum hash, `ARGV[1]` the per-class key
/// prefix. Returns the number of classes dropped.
pub const RESET_SRC: &str = r#"
local classes = redis.call('SMEMBERS', KEYS[1])
for _, class in ipairs(classes) do
    redis.call('DEL', ARGV[1] .. class)
end
redis.call('DEL', KEYS[1], KEYS[2])
return #classes
"#;

pub static INCREMENT: LazyLock<Script> = LazyLock::new(|| Script::new(INCREMENT_SRC));

pub static RESET: LazyLock<Script> = LazyLock::new(|| Script::new(RESET_SRC));
